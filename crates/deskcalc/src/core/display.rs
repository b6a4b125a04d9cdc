//! The editable display buffer and its keystroke rules.

use crate::core::format;

/// Sentinel text shown after a failed evaluation
pub const ERROR_SENTINEL: &str = "Error";

/// Characters that participate in the operator-replacement rule.
///
/// The decimal point is part of this set on purpose: `5.` followed by `+`
/// becomes `5+`, and a second `.` replaces the first.
fn is_edit_operator(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '%' | '.')
}

/// The in-progress expression shown to the user.
///
/// Owns the grouped display text, the previous-expression label, and the
/// reset-pending flag. All mutations keep the text formatted; callers strip
/// the grouping before handing the buffer to the evaluator.
#[derive(Debug, Clone, Default)]
pub struct DisplayBuffer {
    text: String,
    previous: String,
    reset_pending: bool,
}

impl DisplayBuffer {
    /// Creates an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current display text, with grouping separators
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Previous-expression label (e.g. `12+30 =`)
    #[must_use]
    pub fn previous(&self) -> &str {
        &self.previous
    }

    /// True when the next digit keystroke starts a fresh expression
    #[must_use]
    pub fn reset_pending(&self) -> bool {
        self.reset_pending
    }

    /// True when the buffer is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when the buffer shows the error sentinel
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.text == ERROR_SENTINEL
    }

    /// Empties the buffer and the previous-expression label
    pub fn clear(&mut self) {
        self.text.clear();
        self.previous.clear();
        self.reset_pending = false;
    }

    /// Appends one keystroke, subject to the editing rules:
    ///
    /// - with reset pending, a digit or `.` starts a fresh buffer first, and
    ///   the flag drops regardless of the token kind;
    /// - an empty buffer rejects operators other than `.` or `-`;
    /// - an operator typed after an operator replaces it, except `-` after
    ///   `*` or `/`, which appends (signed operand);
    /// - the whole buffer is re-formatted afterwards.
    pub fn append(&mut self, token: char) {
        if self.reset_pending {
            if token.is_ascii_digit() || token == '.' {
                self.text.clear();
            }
            self.reset_pending = false;
        }

        if self.text.is_empty() && is_edit_operator(token) {
            if token == '.' || token == '-' {
                self.text.push(token);
                self.reformat();
            }
            return;
        }

        let last = self.text.chars().last();
        match last {
            Some(prev) if is_edit_operator(token) && is_edit_operator(prev) => {
                if token == '-' && (prev == '*' || prev == '/') {
                    self.text.push(token);
                } else {
                    // Replacement can expose another operator underneath
                    // (e.g. `5*-` then `%`); re-apply the rules so the
                    // no-consecutive-operators invariant holds.
                    self.text.pop();
                    self.append(token);
                    return;
                }
            }
            _ => self.text.push(token),
        }

        self.reformat();
    }

    /// Removes the last character; in the sentinel state, clears instead
    pub fn delete_last(&mut self) {
        if self.is_sentinel() {
            self.clear();
            return;
        }
        self.text.pop();
        self.reformat();
    }

    /// Replaces the buffer with an evaluation result, moving the old text
    /// into the previous-expression label and setting reset-pending
    pub fn complete(&mut self, result: &str) {
        self.previous = format!("{} =", self.text);
        self.text = result.to_string();
        self.reset_pending = true;
    }

    /// Puts the buffer into the error sentinel state and sets reset-pending
    pub fn fail(&mut self) {
        self.text = ERROR_SENTINEL.to_string();
        self.reset_pending = true;
    }

    /// Loads a recalled value (history selection) and sets reset-pending
    pub fn recall(&mut self, text: &str) {
        self.text = text.to_string();
        self.reset_pending = true;
    }

    fn reformat(&mut self) {
        self.text = format::format_expression(&format::strip_grouping(&self.text));
    }
}
