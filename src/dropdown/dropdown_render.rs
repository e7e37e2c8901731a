//! Suggestion dropdown rendering
//!
//! Draws the dropdown as a popup directly above the input field, sized to
//! the widest suggestion and capped at ten visible rows. A dropdown that is
//! open but still waiting on suggestions draws as an empty frame.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::theme;
use crate::widgets::popup;

// Dropdown popup display constants
const MAX_VISIBLE_ROWS: usize = 10;
const MIN_LABEL_WIDTH: usize = 18;
const MAX_LABEL_WIDTH: usize = 58;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;

/// Render the suggestion dropdown above the input field
///
/// Records the popup frame and one rect per visible row in
/// `app.layout_regions` for mouse hit testing.
pub fn render_popup(app: &mut App, frame: &mut Frame, input_area: Rect) {
    if !app.dropdown.is_visible() {
        return;
    }

    let items = app.dropdown.items();
    let visible_count = items.len().min(MAX_VISIBLE_ROWS);

    // A dropdown waiting on suggestions keeps one blank row so the frame
    // still reads as open.
    let popup_height = (visible_count.max(1) as u16) + POPUP_BORDER_HEIGHT;

    let label_width = items
        .iter()
        .map(|suggestion| suggestion.label.width())
        .max()
        .unwrap_or(0)
        .clamp(MIN_LABEL_WIDTH, MAX_LABEL_WIDTH);
    let popup_width = (label_width as u16) + POPUP_PADDING;

    let popup_area = popup::popup_above_anchor(input_area, popup_width, popup_height);
    if popup_area.height == 0 {
        return;
    }

    let focused = app.dropdown.focused();
    let rows: Vec<ListItem> = items
        .iter()
        .take(MAX_VISIBLE_ROWS)
        .enumerate()
        .map(|(i, suggestion)| {
            let padding = " ".repeat(label_width.saturating_sub(suggestion.label.width()));

            let line = if focused == Some(i) {
                Line::styled(
                    format!("► {}{}", suggestion.label, padding),
                    Style::default()
                        .fg(theme::dropdown::ROW_FOCUSED_FG)
                        .bg(theme::dropdown::ROW_FOCUSED_BG)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Line::styled(
                    format!("  {}{}", suggestion.label, padding),
                    Style::default()
                        .fg(theme::dropdown::ROW_FG)
                        .bg(theme::dropdown::BG),
                )
            };

            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Suggestions ")
        .border_style(Style::default().fg(theme::dropdown::BORDER))
        .style(Style::default().bg(theme::dropdown::BG));
    let body = block.inner(popup_area);

    frame.render_widget(List::new(rows).block(block), popup_area);

    app.layout_regions.dropdown_frame = Some(popup_area);
    app.layout_regions.dropdown_rows = row_rects(body, visible_count);
}

/// One single-line rect per visible row, top to bottom inside the popup body
fn row_rects(body: Rect, row_count: usize) -> Vec<Rect> {
    let visible = (row_count as u16).min(body.height);

    (0..visible)
        .map(|offset| Rect {
            x: body.x,
            y: body.y + offset,
            width: body.width,
            height: 1,
        })
        .collect()
}
