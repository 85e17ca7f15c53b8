use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use super::app_state::App;

impl App {
    /// Routes one terminal event to the bar, then to the app
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if !self.bar.handle_key(key) {
                    self.handle_app_key(key);
                }
            }
            Event::Paste(text) if self.bar.is_focused() => {
                self.bar.insert_text(&text);
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                self.bar.handle_click(mouse.column, mouse.row);
            }
            _ => {}
        }
        self.drain_find_events();
    }

    /// Keys the bar did not take. These stand in for the search engine
    /// reporting counts back to the bar.
    fn handle_app_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('/') => self.bar.focus(),
            KeyCode::Char('+') => {
                let total = self.bar.total_results().saturating_add(1);
                self.bar.set_total_results(total);
            }
            KeyCode::Char('-') => {
                let total = self.bar.total_results().saturating_sub(1);
                self.bar.set_total_results(total);
            }
            KeyCode::Char(']') => {
                let current = self.bar.current_result().saturating_add(1);
                self.bar.set_current_result(current);
            }
            KeyCode::Char('[') => {
                let current = self.bar.current_result().saturating_sub(1);
                self.bar.set_current_result(current);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
