//! Deskcalc - a keypad-style terminal calculator.
//!
//! The widget keeps a single editable expression string, formats it with
//! thousands grouping as you type, evaluates it through a fixed-grammar
//! recursive-descent parser, and remembers the last 20 calculations and the
//! light/dark theme across runs.
//!
//! The core state machine is UI-independent: a [`session::Session`] owns
//! the display buffer, history, theme, and persistence, and is driven
//! entirely by [`session::Action`] values. The `tui` module maps terminal
//! events onto those actions and renders the state with ratatui.
//!
//! # Example
//!
//! ```rust
//! use deskcalc::prelude::*;
//!
//! let mut session = Session::new(MemoryStore::new());
//! for key in "12+30".chars() {
//!     let action = if key.is_ascii_digit() {
//!         Action::Digit(key)
//!     } else {
//!         Action::Operator(key)
//!     };
//!     session.handle(action);
//! }
//! session.handle(Action::Evaluate);
//!
//! assert_eq!(session.display().text(), "42");
//! assert_eq!(session.display().previous(), "12+30 =");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod session;
pub mod store;
pub mod theme;
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::display::{DisplayBuffer, ERROR_SENTINEL};
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::format::{format_expression, format_result, strip_grouping};
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{CalcError, CalcResult, Operation};
    pub use crate::session::{Action, Session};
    pub use crate::store::{JsonFileStore, MemoryStore, StateStore, HISTORY_KEY, THEME_KEY};
    pub use crate::theme::Theme;
    pub use crate::tui::{CalculatorApp, InputHandler, KeyAction};
}
