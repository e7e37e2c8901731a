//! History pane rendering
//!
//! Lists submitted queries one numbered row per entry, with the clickable
//! clear control sitting on the pane's top border.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::theme;

/// Label of the clear control, padding included
pub const CLEAR_LABEL: &str = " [ Clear ] ";

/// Render the history pane
///
/// Records the pane and clear control areas for mouse hit testing.
pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) {
    let title = format!(" History ({}) ", app.history.len());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_top(
            Line::from(Span::styled(
                CLEAR_LABEL,
                Style::default().fg(theme::history::CLEAR_BUTTON),
            ))
            .alignment(Alignment::Right),
        )
        .border_style(Style::default().fg(theme::history::BORDER));

    let items: Vec<ListItem> = if app.history.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            " No searches yet",
            Style::default().fg(theme::history::EMPTY),
        )))]
    } else {
        app.history
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {:>2}. ", index + 1),
                        Style::default().fg(theme::history::INDEX),
                    ),
                    Span::styled(entry.as_str(), Style::default().fg(theme::history::ENTRY)),
                ]))
            })
            .collect()
    };

    frame.render_widget(List::new(items).block(block), area);

    app.layout_regions.history_pane = Some(area);
    app.layout_regions.clear_button = Some(clear_button_rect(area));
}

/// Area of the clear control on the pane's top border
///
/// Right-aligned top titles end one cell before the top-right corner, so the
/// control covers the label width back from there.
fn clear_button_rect(area: Rect) -> Rect {
    let label_width = (CLEAR_LABEL.width() as u16).min(area.width.saturating_sub(2));

    Rect {
        x: area.right().saturating_sub(1 + label_width),
        y: area.y,
        width: label_width,
        height: 1,
    }
}
