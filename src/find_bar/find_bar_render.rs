//! Find bar rendering
//!
//! Draws the bar and records where its field and buttons landed so that
//! clicks can be routed back to them.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::find_bar_state::{FindBarRegions, FindInPageBar};

// Find bar display constants
pub const FIND_BAR_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 3;

const PREVIOUS_GLYPH: &str = "▲";
const NEXT_GLYPH: &str = "▼";
const CLOSE_GLYPH: &str = "✕";

/// Render the find bar into `area`
pub fn render_bar<D, S>(bar: &mut FindInPageBar<D, S>, frame: &mut Frame, area: Rect) {
    let styles = bar.styles;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Find: ")
        .border_style(styles.border)
        .style(styles.background);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let label = (!bar.match_count_hidden)
        .then(|| format!(" {} ", super::format_match_count(bar.current_result, bar.total_results)));
    let label_width = label.as_deref().map_or(0, |l| l.width() as u16);

    let [field_area, label_area, previous_area, next_area, close_area] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(label_width),
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(BUTTON_WIDTH),
    ])
    .areas(inner_area);

    let cursor_style = if bar.focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        styles.text
    };
    bar.search_textarea.set_style(styles.text);
    bar.search_textarea.set_cursor_style(cursor_style);
    bar.search_textarea.set_cursor_line_style(Style::default());
    frame.render_widget(&bar.search_textarea, field_area);

    if let Some(label) = label {
        let line = Line::from(Span::styled(label, styles.match_count));
        frame.render_widget(Paragraph::new(line), label_area);
    }

    let navigation_style = if bar.navigation_enabled {
        styles.button
    } else {
        styles.button_disabled
    };
    render_button(frame, previous_area, PREVIOUS_GLYPH, navigation_style);
    render_button(frame, next_area, NEXT_GLYPH, navigation_style);
    render_button(frame, close_area, CLOSE_GLYPH, styles.button);

    bar.regions = FindBarRegions {
        text_field: Some(field_area),
        previous: Some(previous_area),
        next: Some(next_area),
        close: Some(close_area),
    };
}

fn render_button(frame: &mut Frame, area: Rect, glyph: &str, style: Style) {
    let line = Line::from(Span::styled(format!(" {} ", glyph), style));
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
#[path = "find_bar_render_tests.rs"]
mod find_bar_render_tests;
