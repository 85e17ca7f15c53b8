use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::settings_store::SettingsStore;
use crate::error::FindBarError;

const CONFIG_DIR: &str = "findbar";
const SETTINGS_FILE: &str = "settings.toml";

/// Settings persisted as a flat TOML table of strings.
///
/// Every `set` rewrites the whole file. Load and save failures are logged and
/// otherwise ignored so that reading and writing settings never fails.
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileSettings {
    /// `~/.config/findbar/settings.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(SETTINGS_FILE))
    }

    /// Opens the settings file at `path`. A missing or unparsable file gives
    /// an empty store; the file is created on the first `set`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => parse_settings_toml(&contents).unwrap_or_else(|e| {
                log::warn!("Ignoring unreadable settings {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                log::warn!("Failed to read settings {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };

        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the current values, creating parent directories as needed
    pub fn save(&self) -> Result<(), FindBarError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string(&self.values)
            .map_err(|e| FindBarError::Config(e.to_string()))?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl SettingsStore for FileSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        match self.save() {
            Ok(()) => log::debug!("Saved setting {} to {}", key, self.path.display()),
            Err(e) => log::warn!("Failed to save settings {}: {}", self.path.display(), e),
        }
    }
}

fn parse_settings_toml(content: &str) -> Result<BTreeMap<String, String>, toml::de::Error> {
    toml::from_str(content)
}

#[cfg(test)]
#[path = "file_settings_tests.rs"]
mod file_settings_tests;
