//! Find-in-page bar for terminal UIs.
//!
//! [`FindInPageBar`] holds the query, the match counts and the navigation
//! state, relays user actions to a [`FindInPageDelegate`] and keeps the last
//! query in an injected [`SettingsStore`].

pub mod app;
pub mod config;
pub mod error;
pub mod find_bar;
pub mod settings;
pub mod theme;


pub use error::FindBarError;
pub use find_bar::{FindEvent, FindInPageBar, FindInPageDelegate, retrieve_saved_text};
pub use settings::{FileSettings, MemorySettings, SettingsStore};
pub use theme::{Theme, ThemeApplicable, ThemeKind};
