//! Keyboard and mouse event dispatch

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tui_textarea::Input;

use super::App;
use super::mouse_click;
use crate::layout::region_at;

impl App {
    /// Route a terminal event to the matching handler.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }
        self.handle_input_key(key);
    }

    /// Keys that act the same no matter what's on screen.
    /// Returns true when the key was consumed.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.request_clear();
                true
            }
            KeyCode::Esc => {
                if self.dropdown.is_visible() {
                    self.close_dropdown();
                } else {
                    self.should_quit = true;
                }
                true
            }
            _ => false,
        }
    }

    /// Keys aimed at the search field and the dropdown it drives.
    fn handle_input_key(&mut self, key: KeyEvent) {
        if self.dropdown.is_visible() {
            match key.code {
                KeyCode::Down => {
                    self.dropdown.focus_next();
                    return;
                }
                KeyCode::Up => {
                    self.dropdown.focus_previous();
                    return;
                }
                _ => {}
            }
        }

        if key.code == KeyCode::Enter {
            if !self.accept_focused_suggestion() {
                self.submit_query();
            }
            return;
        }

        // Only a real edit refreshes the suggestions; cursor movement
        // and other no-op keys leave the dropdown alone.
        if self.input.textarea.input(Input::from(key)) {
            self.on_query_changed();
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let region = region_at(&self.layout_regions, mouse.column, mouse.row);
        mouse_click::handle_click(self, region);
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
