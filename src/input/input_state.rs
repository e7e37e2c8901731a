use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::theme;

/// Search input state
///
/// A single-line text area; the query is always line zero.
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(theme::input::BORDER)),
        );

        textarea.set_cursor_line_style(Style::default());

        Self { textarea }
    }

    /// Current query text
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the whole query, leaving the cursor at the end
    pub fn set_query(&mut self, text: &str) {
        self.remove_all_text();
        self.textarea.insert_str(text);
    }

    /// Empty the field
    pub fn clear(&mut self) {
        self.remove_all_text();
    }

    fn remove_all_text(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
