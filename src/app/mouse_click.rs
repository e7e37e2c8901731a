//! Mouse click handling
//!
//! Routes left clicks by the screen region they land on.

use super::app_state::App;
use crate::layout::Region;

/// Handle a left mouse button click for the given region.
///
/// Clicking a suggestion row accepts it; clicking the clear control
/// clears the history; clicking anywhere that is neither the input
/// field nor the dropdown dismisses the suggestions.
pub fn handle_click(app: &mut App, region: Option<Region>) {
    match region {
        Some(Region::DropdownRow(index)) => app.select_dropdown_row(index),
        // The popup frame and the field itself are spared, so a click
        // there leaves the dropdown open.
        Some(Region::DropdownFrame | Region::InputField) => {}
        Some(Region::ClearButton) => {
            app.close_dropdown();
            app.request_clear();
        }
        Some(Region::HistoryPane | Region::HelpLine) | None => app.close_dropdown(),
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
