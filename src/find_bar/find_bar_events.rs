//! Key and mouse handling for the find bar

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Position, Rect};
use tui_textarea::{Input, Key};

use super::delegate::FindInPageDelegate;
use super::find_bar_state::FindInPageBar;
use crate::settings::SettingsStore;

impl<D: FindInPageDelegate, S: SettingsStore> FindInPageBar<D, S> {
    /// Handles a key press. Returns true when the bar consumed the key.
    ///
    /// Navigation and close keys work whether or not the field has focus;
    /// everything else only reaches the field while it is focused.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Esc => {
                self.request_close();
                true
            }
            KeyCode::Up => self.press_previous(),
            KeyCode::Down => self.press_next(),
            KeyCode::Char('p') if ctrl => self.press_previous(),
            KeyCode::Char('n') if ctrl => self.press_next(),
            KeyCode::F(3) if shift => self.press_previous(),
            KeyCode::F(3) => self.press_next(),
            _ if !self.focused => false,
            _ => self.handle_field_input(Input::from(key)),
        }
    }

    /// Handles a left click at a screen position using the regions of the
    /// last render. Returns true when the click landed on the bar.
    pub fn handle_click(&mut self, column: u16, row: u16) -> bool {
        let position = Position::new(column, row);
        let hit = |rect: Option<Rect>| rect.is_some_and(|r| r.contains(position));
        let regions = self.regions;

        if hit(regions.previous) {
            self.press_previous();
        } else if hit(regions.next) {
            self.press_next();
        } else if hit(regions.close) {
            self.request_close();
        } else if hit(regions.text_field) {
            self.focus();
        } else {
            return false;
        }
        true
    }

    fn handle_field_input(&mut self, input: Input) -> bool {
        match input {
            // Commit key: swallow it and drop focus instead of inserting a newline
            Input { key: Key::Enter, .. }
            | Input {
                key: Key::Char('m' | 'j'),
                ctrl: true,
                ..
            } => {
                self.resign_focus();
            }
            input => {
                if self.search_textarea.input(input) {
                    self.text_did_change();
                }
            }
        }
        true
    }

    // Navigation keys and buttons only act while navigation is enabled
    fn press_previous(&mut self) -> bool {
        if self.navigation_enabled {
            self.request_previous();
        }
        self.navigation_enabled
    }

    fn press_next(&mut self) -> bool {
        if self.navigation_enabled {
            self.request_next();
        }
        self.navigation_enabled
    }
}

#[cfg(test)]
#[path = "find_bar_events_tests.rs"]
mod find_bar_events_tests;
