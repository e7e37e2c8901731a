use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        // Regions are re-recorded from scratch on every frame.
        self.layout_regions.reset();

        let layout = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (history_area, input_area, help_area) = (layout[0], layout[1], layout[2]);

        crate::history::history_render::render_pane(self, frame, history_area);
        crate::input::input_render::render_field(self, frame, input_area);
        crate::help::help_line_render::render_line(self, frame, help_area);

        // The suggestion popup paints last so it sits over the history pane.
        crate::dropdown::dropdown_render::render_popup(self, frame, input_area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
