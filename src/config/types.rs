// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::settings::FileSettings;
use crate::theme::{Theme, ThemeKind};

/// Theme configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub kind: ThemeKind,
}

impl ThemeConfig {
    pub fn theme(&self) -> Theme {
        Theme::from_kind(self.kind)
    }
}

/// Settings storage section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsConfig {
    /// Overrides the settings file location
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl SettingsConfig {
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(FileSettings::default_path)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
}
