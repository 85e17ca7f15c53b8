use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use super::delegate::FindInPageDelegate;
use crate::settings::SettingsStore;
use crate::theme::{Theme, ThemeApplicable, ThemeKind};

/// Settings key holding the last non-empty query
pub const SAVED_TEXT_KEY: &str = "findInPageSavedTextKey";

/// Totals above this are shown as `"<current>/500+"`
pub const MATCH_COUNT_CAP: usize = 500;

const PLACEHOLDER: &str = "Find in page";

/// Formats the match counter label.
pub fn format_match_count(current_result: usize, total_results: usize) -> String {
    if total_results > MATCH_COUNT_CAP {
        format!("{}/{}+", current_result, MATCH_COUNT_CAP)
    } else {
        format!("{}/{}", current_result, total_results)
    }
}

/// Reads the last persisted query. Needs no bar instance, so a new bar can
/// be pre-filled before it exists.
pub fn retrieve_saved_text(settings: &impl SettingsStore) -> Option<String> {
    settings.get(SAVED_TEXT_KEY)
}

/// Styles resolved from the current theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindBarStyles {
    pub border: Style,
    pub background: Style,
    pub text: Style,
    pub match_count: Style,
    pub button: Style,
    pub button_disabled: Style,
}

impl FindBarStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        let colors = &theme.colors;
        let text_color = if theme.kind == ThemeKind::Light {
            colors.text_primary
        } else {
            colors.text_inverted
        };
        let background = Style::default().bg(colors.layer_background);

        Self {
            border: Style::default().fg(colors.border_primary),
            background,
            text: background.fg(text_color),
            match_count: Style::default().fg(colors.action_secondary),
            button: Style::default().fg(colors.icon_primary),
            button_disabled: Style::default().fg(colors.icon_disabled),
        }
    }
}

impl Default for FindBarStyles {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Screen areas of the last render, for mouse hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct FindBarRegions {
    pub text_field: Option<Rect>,
    pub previous: Option<Rect>,
    pub next: Option<Rect>,
    pub close: Option<Rect>,
}

fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.set_placeholder_text(PLACEHOLDER);
    textarea
}

/// The find-in-page bar
///
/// `D` receives the user-originated events, `S` stores the last query.
pub struct FindInPageBar<D, S> {
    pub(super) delegate: D,
    pub(super) settings: S,
    pub(super) search_textarea: TextArea<'static>,
    pub(super) current_result: usize,
    pub(super) total_results: usize,
    pub(super) match_count_hidden: bool,
    pub(super) navigation_enabled: bool,
    pub(super) focused: bool,
    pub(super) styles: FindBarStyles,
    pub(super) regions: FindBarRegions,
}

impl<D: FindInPageDelegate, S: SettingsStore> FindInPageBar<D, S> {
    /// Creates an empty bar with no matches
    pub fn new(delegate: D, settings: S) -> Self {
        Self {
            delegate,
            settings,
            search_textarea: create_search_textarea(),
            current_result: 0,
            total_results: 0,
            match_count_hidden: true,
            navigation_enabled: false,
            focused: false,
            styles: FindBarStyles::default(),
            regions: FindBarRegions::default(),
        }
    }

    /// Creates a bar pre-filled with the persisted query, if there is one.
    ///
    /// The pre-fill goes through [`set_query`](Self::set_query), so the
    /// delegate sees a `QueryChanged` for it.
    pub fn with_saved_text(delegate: D, settings: S) -> Self {
        let saved = retrieve_saved_text(&settings);
        let mut bar = Self::new(delegate, settings);
        if let Some(text) = saved {
            bar.set_query(&text);
        }
        bar
    }

    /// Current query text
    pub fn text(&self) -> &str {
        self.search_textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Replaces the query and runs the text-changed flow: match count
    /// visibility, persistence and `QueryChanged`.
    ///
    /// Line breaks are dropped; the field holds a single line.
    pub fn set_query(&mut self, text: &str) {
        let text = strip_line_breaks(text);
        self.replace_text(&text);
        self.text_did_change();
    }

    pub fn current_result(&self) -> usize {
        self.current_result
    }

    pub fn set_current_result(&mut self, current_result: usize) {
        self.current_result = current_result;
    }

    pub fn total_results(&self) -> usize {
        self.total_results
    }

    pub fn set_total_results(&mut self, total_results: usize) {
        self.total_results = total_results;
        self.navigation_enabled = total_results > 1;
    }

    /// Match counter label, derived from the counts on every call
    pub fn match_count_label(&self) -> String {
        format_match_count(self.current_result, self.total_results)
    }

    pub fn is_match_count_hidden(&self) -> bool {
        self.match_count_hidden
    }

    /// Whether the previous/next buttons accept presses
    pub fn is_navigation_enabled(&self) -> bool {
        self.navigation_enabled
    }

    pub fn request_previous(&mut self) {
        let text = self.text().to_string();
        log::debug!("Find previous: {:?}", text);
        self.delegate.did_find_previous(&text);
    }

    pub fn request_next(&mut self) {
        let text = self.text().to_string();
        log::debug!("Find next: {:?}", text);
        self.delegate.did_find_next(&text);
    }

    pub fn request_close(&mut self) {
        log::debug!("Find bar close requested");
        self.delegate.did_press_close();
    }

    /// Saves `text` as the last query. Empty text leaves the saved value alone.
    pub fn persist_query(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.settings.set(SAVED_TEXT_KEY, text);
    }

    /// Gives the query field input focus
    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn resign_focus(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Text replacement hook for typed or pasted text.
    ///
    /// A lone line break is the commit key: it is swallowed, focus is
    /// resigned and `false` is returned. Line breaks inside longer text are
    /// dropped before insertion.
    pub fn insert_text(&mut self, text: &str) -> bool {
        if is_line_break(text) {
            self.resign_focus();
            return false;
        }

        let text = strip_line_breaks(text);
        if !text.is_empty() && self.search_textarea.insert_str(&text) {
            self.text_did_change();
        }
        true
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn styles(&self) -> &FindBarStyles {
        &self.styles
    }

    /// Consumes the bar, handing back its collaborators
    pub fn into_parts(self) -> (D, S) {
        (self.delegate, self.settings)
    }

    pub(super) fn replace_text(&mut self, text: &str) {
        self.search_textarea.select_all();
        self.search_textarea.cut();
        self.search_textarea.insert_str(text);
    }

    pub(super) fn text_did_change(&mut self) {
        let text = self.text().to_string();
        self.match_count_hidden = text.trim().is_empty();
        self.persist_query(&text);
        log::debug!("Find query changed: {:?}", text);
        self.delegate.did_text_change(&text);
    }
}

impl<D, S> ThemeApplicable for FindInPageBar<D, S> {
    fn apply_theme(&mut self, theme: &Theme) {
        self.styles = FindBarStyles::from_theme(theme);
    }
}

pub(super) fn is_line_break(text: &str) -> bool {
    matches!(text, "\n" | "\r" | "\r\n")
}

fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}

#[cfg(test)]
#[path = "find_bar_state_tests.rs"]
mod find_bar_state_tests;
