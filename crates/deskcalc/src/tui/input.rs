//! Keyboard dispatch: crossterm key events to session actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::session::Action;

/// Result of mapping one key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Dispatch a session action
    Session(Action),
    /// Move the history selection up one row
    SelectUp,
    /// Move the history selection down one row
    SelectDown,
    /// Recall the highlighted history row
    SelectCurrent,
    /// Quit the application
    Quit,
    /// Ignored input
    None,
}

/// Maps key events to actions.
///
/// The mapping is mode-sensitive: while the history panel is open, the
/// arrow keys and Enter drive the selection instead of the expression.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent, history_open: bool) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        if history_open {
            match code {
                KeyCode::Up => return KeyAction::SelectUp,
                KeyCode::Down => return KeyAction::SelectDown,
                KeyCode::Enter => return KeyAction::SelectCurrent,
                KeyCode::Char('x' | 'X') => return KeyAction::Session(Action::ClearHistory),
                _ => {}
            }
        }

        match code {
            KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '.' => {
                KeyAction::Session(Action::Digit(ch))
            }
            KeyCode::Char(ch) if matches!(ch, '+' | '-' | '*' | '/' | '%') => {
                KeyAction::Session(Action::Operator(ch))
            }
            KeyCode::Char('h' | 'H') => KeyAction::Session(Action::ToggleHistory),
            KeyCode::Char('t' | 'T') => KeyAction::Session(Action::ToggleTheme),
            KeyCode::Enter => KeyAction::Session(Action::Evaluate),
            KeyCode::Backspace => KeyAction::Session(Action::DeleteLast),
            KeyCode::Esc => KeyAction::Session(Action::Escape),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Digit and operator keys =====

    #[test]
    fn test_digit_keys() {
        let handler = InputHandler::new();
        for ch in '0'..='9' {
            assert_eq!(
                handler.handle_key(key(KeyCode::Char(ch)), false),
                KeyAction::Session(Action::Digit(ch))
            );
        }
    }

    #[test]
    fn test_decimal_point_is_a_digit_key() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('.')), false),
            KeyAction::Session(Action::Digit('.'))
        );
    }

    #[test]
    fn test_operator_keys() {
        let handler = InputHandler::new();
        for ch in ['+', '-', '*', '/', '%'] {
            assert_eq!(
                handler.handle_key(key(KeyCode::Char(ch)), false),
                KeyAction::Session(Action::Operator(ch))
            );
        }
    }

    // ===== Action keys =====

    #[test]
    fn test_enter_evaluates() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), false),
            KeyAction::Session(Action::Evaluate)
        );
    }

    #[test]
    fn test_backspace_deletes() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Backspace), false),
            KeyAction::Session(Action::DeleteLast)
        );
    }

    #[test]
    fn test_escape_dispatches_escape() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), false),
            KeyAction::Session(Action::Escape)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), true),
            KeyAction::Session(Action::Escape)
        );
    }

    #[test]
    fn test_h_toggles_history() {
        let handler = InputHandler::new();
        for code in [KeyCode::Char('h'), KeyCode::Char('H')] {
            assert_eq!(
                handler.handle_key(key(code), false),
                KeyAction::Session(Action::ToggleHistory)
            );
        }
    }

    #[test]
    fn test_t_toggles_theme() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('t')), false),
            KeyAction::Session(Action::ToggleTheme)
        );
    }

    // ===== History panel mode =====

    #[test]
    fn test_arrows_move_selection_when_panel_open() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Up), true),
            KeyAction::SelectUp
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Down), true),
            KeyAction::SelectDown
        );
    }

    #[test]
    fn test_arrows_ignored_when_panel_closed() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Up), false), KeyAction::None);
        assert_eq!(
            handler.handle_key(key(KeyCode::Down), false),
            KeyAction::None
        );
    }

    #[test]
    fn test_enter_selects_when_panel_open() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), true),
            KeyAction::SelectCurrent
        );
    }

    #[test]
    fn test_x_clears_history_when_panel_open() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('x')), true),
            KeyAction::Session(Action::ClearHistory)
        );
        // Outside the panel, 'x' means nothing
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('x')), false),
            KeyAction::None
        );
    }

    #[test]
    fn test_digits_still_type_while_panel_open() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('7')), true),
            KeyAction::Session(Action::Digit('7'))
        );
    }

    // ===== Control keys =====

    #[test]
    fn test_ctrl_c_and_ctrl_q_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(ctrl(KeyCode::Char('c')), false),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(ctrl(KeyCode::Char('q')), false),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_ctrl_other_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(ctrl(KeyCode::Char('h')), false),
            KeyAction::None
        );
    }

    // ===== Unknown keys =====

    #[test]
    fn test_unknown_keys_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::F(1)), false),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Tab), false),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('z')), false),
            KeyAction::None
        );
    }
}
