//! Tests for layout/layout_regions

use ratatui::layout::Rect;

use super::LayoutRegions;

#[test]
fn test_default_has_no_regions() {
    let regions = LayoutRegions::default();

    assert!(regions.history_pane.is_none());
    assert!(regions.clear_button.is_none());
    assert!(regions.input_field.is_none());
    assert!(regions.dropdown_frame.is_none());
    assert!(regions.dropdown_rows.is_empty());
    assert!(regions.help_line.is_none());
}

#[test]
fn test_reset_forgets_recorded_regions() {
    let mut regions = LayoutRegions {
        history_pane: Some(Rect::new(0, 0, 80, 20)),
        clear_button: Some(Rect::new(68, 0, 11, 1)),
        input_field: Some(Rect::new(0, 20, 80, 3)),
        dropdown_frame: Some(Rect::new(0, 14, 30, 6)),
        dropdown_rows: vec![Rect::new(1, 15, 28, 1), Rect::new(1, 16, 28, 1)],
        help_line: Some(Rect::new(0, 23, 80, 1)),
    };

    regions.reset();

    assert!(regions.history_pane.is_none());
    assert!(regions.clear_button.is_none());
    assert!(regions.input_field.is_none());
    assert!(regions.dropdown_frame.is_none());
    assert!(regions.dropdown_rows.is_empty());
    assert!(regions.help_line.is_none());
}
