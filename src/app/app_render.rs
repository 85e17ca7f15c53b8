use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::find_bar::{FIND_BAR_HEIGHT, render_bar};

const HELP_TEXT: &str = " / focus · Enter unfocus · ↑↓ navigate · +/- total · [/] current · q quit ";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [log_area, bar_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(FIND_BAR_HEIGHT)])
                .areas(frame.area());

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Events ")
            .title_bottom(Line::from(HELP_TEXT).right_aligned())
            .border_style(Style::default().fg(Color::DarkGray));

        // Show the newest lines that fit
        let visible = block.inner(log_area).height as usize;
        let start = self.event_log.len().saturating_sub(visible);
        let lines: Vec<Line> = self.event_log[start..]
            .iter()
            .map(|l| Line::from(l.as_str()))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), log_area);
        render_bar(&mut self.bar, frame, bar_area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
