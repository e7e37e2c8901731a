//! Help line rendering
//!
//! Renders the key hint line at the bottom of the screen.

use ratatui::{Frame, layout::Rect, style::Style, widgets::Paragraph};

use crate::app::App;
use crate::theme;

/// Render the help line (bottom of screen)
pub fn render_line(app: &mut App, frame: &mut Frame, area: Rect) {
    // The hints follow the dropdown: while it is open, the arrows and
    // Enter drive the suggestion rows instead of the query.
    let help_text = if app.dropdown.is_visible() {
        " ↑/↓: Choose | Enter: Accept | Esc: Dismiss | Ctrl+C: Quit"
    } else {
        " Enter: Submit | Ctrl+L: Clear History | Esc: Quit"
    };

    let help = Paragraph::new(help_text).style(Style::default().fg(theme::help::TEXT));
    frame.render_widget(help, area);

    app.layout_regions.help_line = Some(area);
}
