//! Query history state
//!
//! The service owns the history; this is a mirror of its latest answer.
//! Entries are replaced wholesale whenever a submit or clear response lands.

/// Submitted query history as last reported by the service
#[derive(Debug, Clone, Default)]
pub struct HistoryState {
    entries: Vec<String>,
}

impl HistoryState {
    /// Entries in the order the service reported them
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Replace all entries with the service's latest answer
    pub fn replace(&mut self, entries: Vec<String>) {
        self.entries = entries;
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "history_state_tests.rs"]
mod history_state_tests;
