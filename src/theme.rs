//! Theme module
//!
//! Color palettes and the `ThemeApplicable` capability for components that
//! restyle themselves when the theme changes.

use ratatui::style::Color;
use serde::Deserialize;

/// Light or dark palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Light,
    #[default]
    Dark,
}

/// Named colors a component may pick from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub border_primary: Color,
    pub text_primary: Color,
    pub text_inverted: Color,
    pub action_secondary: Color,
    pub icon_primary: Color,
    pub icon_disabled: Color,
    pub layer_background: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub kind: ThemeKind,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            colors: ThemeColors {
                border_primary: Color::Gray,
                text_primary: Color::Black,
                text_inverted: Color::White,
                action_secondary: Color::DarkGray,
                icon_primary: Color::Black,
                icon_disabled: Color::Gray,
                layer_background: Color::White,
            },
        }
    }

    pub fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
            colors: ThemeColors {
                border_primary: Color::Cyan,
                text_primary: Color::Black,
                text_inverted: Color::White,
                action_secondary: Color::Gray,
                icon_primary: Color::White,
                icon_disabled: Color::DarkGray,
                layer_background: Color::Black,
            },
        }
    }

    pub fn from_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Light => Self::light(),
            ThemeKind::Dark => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_kind(ThemeKind::default())
    }
}

/// Components that restyle themselves from a theme
pub trait ThemeApplicable {
    fn apply_theme(&mut self, theme: &Theme);
}

#[cfg(test)]
#[path = "theme_tests.rs"]
mod theme_tests;
