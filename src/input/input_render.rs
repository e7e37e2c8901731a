//! Search input rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
};

use crate::app::App;
use crate::theme;

/// Render the search input field
///
/// The border brightens while the dropdown is open. Records the field's
/// area for mouse hit testing and for anchoring the dropdown popup.
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let border_color = if app.dropdown.is_visible() {
        theme::input::BORDER_ACTIVE
    } else {
        theme::input::BORDER
    };

    app.input.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(&app.input.textarea, area);

    app.layout_regions.input_field = Some(area);
}
