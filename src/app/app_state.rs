use std::sync::mpsc::{self, Receiver, Sender};

use crate::find_bar::{FindEvent, FindInPageBar};
use crate::settings::SettingsStore;
use crate::theme::{Theme, ThemeApplicable};

const MAX_LOG_LINES: usize = 200;

pub type HostedBar = FindInPageBar<Sender<FindEvent>, Box<dyn SettingsStore>>;

/// Application state
pub struct App {
    pub bar: HostedBar,
    pub event_log: Vec<String>,
    find_events: Receiver<FindEvent>,
    should_quit: bool,
}

impl App {
    /// Creates the app with the bar focused and pre-filled from `settings`
    pub fn new(settings: Box<dyn SettingsStore>, theme: &Theme) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut bar = FindInPageBar::with_saved_text(tx, settings);
        bar.apply_theme(theme);
        bar.focus();

        let mut app = Self {
            bar,
            event_log: Vec::new(),
            find_events: rx,
            should_quit: false,
        };
        app.drain_find_events();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Moves pending bar events into the log. A close request quits.
    pub fn drain_find_events(&mut self) {
        while let Ok(event) = self.find_events.try_recv() {
            if event == FindEvent::CloseRequested {
                self.should_quit = true;
            }
            self.push_log(describe_event(&event));
        }
    }

    fn push_log(&mut self, line: String) {
        self.event_log.push(line);
        if self.event_log.len() > MAX_LOG_LINES {
            let excess = self.event_log.len() - MAX_LOG_LINES;
            self.event_log.drain(..excess);
        }
    }
}

pub(super) fn describe_event(event: &FindEvent) -> String {
    match event {
        FindEvent::QueryChanged(text) => format!("queryChanged({:?})", text),
        FindEvent::FindPrevious(text) => format!("findPrevious({:?})", text),
        FindEvent::FindNext(text) => format!("findNext({:?})", text),
        FindEvent::CloseRequested => "closeRequested()".to_string(),
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
