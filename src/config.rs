//! Configuration loading
//!
//! Reads `~/.config/findbar/config.toml`. Every field is optional.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::FindBarError;

pub use types::{Config, SettingsConfig, ThemeConfig};

const CONFIG_DIR: &str = "findbar";
const CONFIG_FILE: &str = "config.toml";

pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR))
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(CONFIG_FILE))
}

/// Loads the user config, falling back to defaults on any problem
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    load_config_from_path(&path).unwrap_or_else(|e| {
        log::warn!("Using default config: {}", e);
        Config::default()
    })
}

/// Loads the config at `path`. A missing file yields the defaults.
pub fn load_config_from_path(path: &Path) -> Result<Config, FindBarError> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_config_toml(&contents),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(FindBarError::Io(e)),
    }
}

pub fn parse_config_toml(content: &str) -> Result<Config, FindBarError> {
    toml::from_str(content).map_err(|e| FindBarError::Config(e.to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
