//! The owning calculator session.
//!
//! A [`Session`] wires the display buffer, evaluator, history, and theme
//! together behind a closed set of input actions. There are no ambient
//! globals: callers hold the session and feed it [`Action`] values, then
//! read the exposed state back out for rendering.

use tracing::{debug, warn};

use crate::core::display::DisplayBuffer;
use crate::core::evaluator::Evaluator;
use crate::core::format;
use crate::core::history::History;
use crate::store::{StateStore, HISTORY_KEY, THEME_KEY};
use crate::theme::Theme;

/// Input actions dispatched into the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A digit or decimal-point key
    Digit(char),
    /// An operator key from the fixed set (`+ - * / %`)
    Operator(char),
    /// Evaluate the current expression
    Evaluate,
    /// Delete the last character
    DeleteLast,
    /// Clear the expression and the previous-expression label
    Clear,
    /// Close the history panel if open, otherwise clear
    Escape,
    /// Open or close the history panel
    ToggleHistory,
    /// Empty the history list and its persisted record
    ClearHistory,
    /// Recall the history entry at the given index (0 = most recent)
    SelectHistory(usize),
    /// Switch between light and dark
    ToggleTheme,
}

/// A running calculator session
#[derive(Debug)]
pub struct Session<S: StateStore> {
    display: DisplayBuffer,
    history: History,
    evaluator: Evaluator,
    theme: Theme,
    history_open: bool,
    store: S,
}

impl<S: StateStore> Session<S> {
    /// Creates a session, restoring theme and history from the store.
    /// Missing or malformed stored data falls back to defaults.
    pub fn new(store: S) -> Self {
        let theme = Theme::from_stored(store.get(THEME_KEY).as_deref());
        let history = store
            .get(HISTORY_KEY)
            .and_then(|json| match History::from_json(&json) {
                Ok(history) => Some(history),
                Err(err) => {
                    warn!(%err, "stored history is malformed, starting empty");
                    None
                }
            })
            .unwrap_or_default();

        Self {
            display: DisplayBuffer::new(),
            history,
            evaluator: Evaluator::new(),
            theme,
            history_open: false,
            store,
        }
    }

    /// Current display buffer
    #[must_use]
    pub fn display(&self) -> &DisplayBuffer {
        &self.display
    }

    /// Calculation history
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Active theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// True while the history panel is open
    #[must_use]
    pub fn history_open(&self) -> bool {
        self.history_open
    }

    /// Consumes the session, returning the store (for handover tests)
    pub fn into_store(self) -> S {
        self.store
    }

    /// Applies one input action
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Digit(ch) | Action::Operator(ch) => self.display.append(ch),
            Action::Evaluate => self.evaluate(),
            Action::DeleteLast => self.display.delete_last(),
            Action::Clear => self.display.clear(),
            Action::Escape => {
                if self.history_open {
                    self.history_open = false;
                } else {
                    self.display.clear();
                }
            }
            Action::ToggleHistory => self.history_open = !self.history_open,
            Action::ClearHistory => self.clear_history(),
            Action::SelectHistory(index) => self.select_history(index),
            Action::ToggleTheme => self.toggle_theme(),
        }
    }

    fn evaluate(&mut self) {
        let shown = self.display.text().to_string();
        let raw = format::strip_grouping(&shown);

        match self.evaluator.evaluate_str(&raw) {
            Ok(value) => {
                let result = format::format_result(value);
                debug!(expression = %shown, %result, "evaluated");
                self.display.complete(&result);
                if self.history.record(&shown, &result) {
                    self.persist_history();
                }
            }
            Err(err) => {
                debug!(expression = %shown, %err, "evaluation failed");
                self.display.fail();
            }
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.store.set(THEME_KEY, self.theme.as_str());
    }

    fn clear_history(&mut self) {
        self.history.clear();
        self.store.remove(HISTORY_KEY);
    }

    fn select_history(&mut self, index: usize) {
        if let Some(entry) = self.history.get(index) {
            let result = entry.result.clone();
            self.display.recall(&result);
        }
        self.history_open = false;
    }

    fn persist_history(&mut self) {
        match self.history.to_json() {
            Ok(json) => self.store.set(HISTORY_KEY, &json),
            Err(err) => warn!(%err, "cannot serialize history"),
        }
    }
}
