//! Suggestion dropdown state
//!
//! Tracks the dropdown's visibility, rows, keyboard focus, and which
//! in-flight request it is waiting on. Focus is kept in bounds by the
//! navigation methods; callers never index past the row list.

/// One row in the suggestion dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Text shown in the dropdown row
    pub label: String,
    /// Text placed into the input when the row is accepted
    pub value: String,
}

impl Suggestion {
    /// Build a suggestion whose label and accepted value are the same text
    pub fn new(text: impl Into<String>) -> Self {
        let label = text.into();
        Self {
            value: label.clone(),
            label,
        }
    }
}

/// Suggestion dropdown state
///
/// `awaiting` holds the id of the suggestion request whose answer should
/// fill the dropdown. Populating or closing drops it, which is how answers
/// to superseded requests get recognized and discarded.
#[derive(Debug, Clone, Default)]
pub struct DropdownState {
    /// Whether the dropdown is drawn
    visible: bool,
    /// Rows in display order
    items: Vec<Suggestion>,
    /// Keyboard focus (None = typing focus stays in the input)
    focused: Option<usize>,
    /// Id of the in-flight suggestion request, if any
    awaiting: Option<u64>,
}

impl DropdownState {
    /// Whether the dropdown is drawn
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Rows in display order
    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    /// Currently focused row index, if any
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Id of the suggestion request the dropdown is waiting on, if any
    pub fn awaiting(&self) -> Option<u64> {
        self.awaiting
    }

    /// Show an empty dropdown and mark the request id it is waiting for
    pub fn open_pending(&mut self, request_id: u64) {
        self.visible = true;
        self.items.clear();
        self.focused = None;
        self.awaiting = Some(request_id);
    }

    /// Fill the dropdown with fresh rows
    ///
    /// Resets focus so typing focus returns to the input, and clears
    /// `awaiting` now that the answer has landed.
    pub fn populate(&mut self, items: Vec<Suggestion>) {
        self.items = items;
        self.focused = None;
        self.awaiting = None;
    }

    /// Hide the dropdown and drop its rows, focus, and pending request id
    pub fn close(&mut self) {
        self.visible = false;
        self.items.clear();
        self.focused = None;
        self.awaiting = None;
    }

    /// Move focus to the next row, wrapping to the first past the end
    ///
    /// The first press lands on the first row. Hidden or empty dropdowns
    /// ignore navigation.
    pub fn focus_next(&mut self) {
        if !self.visible || self.items.is_empty() {
            return;
        }

        self.focused = match self.focused {
            Some(current) => Some((current + 1) % self.items.len()),
            None => Some(0),
        };
    }

    /// Move focus to the previous row, wrapping to the last before the start
    ///
    /// The first press lands on the last row. Hidden or empty dropdowns
    /// ignore navigation.
    pub fn focus_previous(&mut self) {
        if !self.visible || self.items.is_empty() {
            return;
        }

        self.focused = match self.focused {
            Some(0) | None => Some(self.items.len() - 1),
            Some(current) => Some(current - 1),
        };
    }

    /// The row under keyboard focus, if any
    pub fn focused_suggestion(&self) -> Option<&Suggestion> {
        self.focused.and_then(|index| self.items.get(index))
    }
}

#[cfg(test)]
#[path = "dropdown_state_tests.rs"]
mod dropdown_state_tests;
