use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Position a popup directly above an anchor area, left edges aligned.
///
/// Width is clamped to the anchor's width and height to the space above it,
/// so the popup never spills past the screen edge or over the anchor.
pub fn popup_above_anchor(anchor: Rect, width: u16, height: u16) -> Rect {
    let popup_height = height.min(anchor.y);

    Rect {
        x: anchor.x,
        y: anchor.y.saturating_sub(popup_height),
        width: width.min(anchor.width),
        height: popup_height,
    }
}

/// Blank the cells behind a popup so underlying content does not bleed through.
pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
