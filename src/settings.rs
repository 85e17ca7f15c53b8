//! Settings module
//!
//! Key-value settings injected into the find bar. The bar only ever stores
//! the last non-empty query, but the store itself is a general string map.

mod file_settings;
mod settings_store;

pub use file_settings::FileSettings;
pub use settings_store::{MemorySettings, SettingsStore};
