//! Bounded calculation history, most recent first.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A single history row; both fields are already formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression as it was displayed before evaluation
    pub expression: String,
    /// The formatted result
    pub result: String,
}

impl HistoryEntry {
    /// Creates a new history entry
    #[must_use]
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }

    /// Returns a `expr = result` display line
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

/// Bounded log of past calculations.
///
/// Entries are kept most recent first. Recording an expression equal to the
/// most recent entry is a no-op; recording past capacity evicts the oldest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    /// Maximum number of retained entries
    pub const MAX_ENTRIES: usize = 20;

    /// Creates an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a calculation.
    ///
    /// Only the most recent entry is consulted for duplicate suppression -
    /// an expression further down the list is recorded again. Returns true
    /// when an entry was inserted.
    pub fn record(&mut self, expression: &str, result: &str) -> bool {
        if self
            .entries
            .front()
            .is_some_and(|entry| entry.expression == expression)
        {
            return false;
        }

        self.entries.push_front(HistoryEntry::new(expression, result));
        self.entries.truncate(Self::MAX_ENTRIES);
        true
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clears all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the entry at `index` (0 = most recent)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Returns the oldest retained entry
    #[must_use]
    pub fn oldest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Iterates over the entries, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Serializes the history to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Deserializes history from JSON, truncating oversized stored lists
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut entries: VecDeque<HistoryEntry> = serde_json::from_str(json)?;
        entries.truncate(Self::MAX_ENTRIES);
        Ok(Self { entries })
    }
}
