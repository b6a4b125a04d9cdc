//! TUI application state: a session plus render-side concerns
//! (keypad highlight, history selection, quit flag, mouse hit area).

use ratatui::layout::Rect;

use super::input::KeyAction;
use super::keypad::Keypad;
use crate::session::{Action, Session};
use crate::store::StateStore;

/// Top-level TUI state wrapping a calculator session
#[derive(Debug)]
pub struct CalculatorApp<S: StateStore> {
    session: Session<S>,
    keypad: Keypad,
    selected: usize,
    keypad_area: Option<Rect>,
    should_quit: bool,
}

impl<S: StateStore> CalculatorApp<S> {
    /// Creates the app, restoring persisted state through the session
    pub fn new(store: S) -> Self {
        Self {
            session: Session::new(store),
            keypad: Keypad::new(),
            selected: 0,
            keypad_area: None,
            should_quit: false,
        }
    }

    /// The wrapped session
    #[must_use]
    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// The on-screen keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Currently highlighted history row (0 = most recent)
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// True once the user asked to quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Last rendered keypad area, used for mouse hit-testing
    #[must_use]
    pub fn keypad_area(&self) -> Option<Rect> {
        self.keypad_area
    }

    /// Records where the keypad was drawn (called by the renderer)
    pub fn set_keypad_area(&mut self, area: Rect) {
        self.keypad_area = Some(area);
    }

    /// Applies a mapped key action
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Session(action) => self.dispatch(action),
            KeyAction::SelectUp => self.selected = self.selected.saturating_sub(1),
            KeyAction::SelectDown => {
                if self.selected + 1 < self.session.history().len() {
                    self.selected += 1;
                }
            }
            KeyAction::SelectCurrent => self.dispatch(Action::SelectHistory(self.selected)),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    /// Handles a left mouse click at terminal coordinates
    pub fn click(&mut self, x: u16, y: u16) {
        let Some(area) = self.keypad_area else {
            return;
        };
        if let Some(index) = self.keypad.hit_test(area, x, y) {
            if let Some(action) = self.keypad.button_action(index) {
                self.dispatch(action);
            }
        }
    }

    fn dispatch(&mut self, action: Action) {
        self.keypad.highlight_action(action);
        self.session.handle(action);

        // Keep the history selection inside the (possibly shrunk) list
        let len = self.session.history().len();
        if matches!(action, Action::ToggleHistory | Action::ClearHistory) {
            self.selected = 0;
        } else if len > 0 && self.selected >= len {
            self.selected = len - 1;
        } else if len == 0 {
            self.selected = 0;
        }
    }
}
