//! Rendered region bookkeeping

use ratatui::layout::Rect;

/// UI component identified by a screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// History pane listing submitted queries
    HistoryPane,
    /// Clear control on the history pane's top border
    ClearButton,
    /// Search input field
    InputField,
    /// Suggestion popup chrome (borders, empty body)
    DropdownFrame,
    /// A single suggestion row, by index into the dropdown items
    DropdownRow(usize),
    /// Key hint line at the bottom of the screen
    HelpLine,
}

/// Screen areas of UI components captured during rendering
///
/// Render functions fill these in every frame; mouse handling reads them on
/// the next event. `None` means the component was not drawn last frame.
#[derive(Debug, Default, Clone)]
pub struct LayoutRegions {
    /// History pane, outer area including borders
    pub history_pane: Option<Rect>,
    /// Clickable clear control on the history pane's top border
    pub clear_button: Option<Rect>,
    /// Search input field, outer area including borders
    pub input_field: Option<Rect>,
    /// Suggestion popup, outer area including borders
    pub dropdown_frame: Option<Rect>,
    /// One rect per visible suggestion row, in display order
    pub dropdown_rows: Vec<Rect>,
    /// Key hint line
    pub help_line: Option<Rect>,
}

impl LayoutRegions {
    /// Forget all recorded regions before a new frame is drawn
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
