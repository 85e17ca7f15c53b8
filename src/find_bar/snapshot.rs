use serde::{Deserialize, Serialize};

use super::delegate::FindInPageDelegate;
use super::find_bar_state::FindInPageBar;
use crate::error::FindBarError;
use crate::settings::SettingsStore;

/// The only snapshot layout this build understands
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized bar state, stored as TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindBarSnapshot {
    pub version: u32,
    pub query: String,
    pub current_result: usize,
    pub total_results: usize,
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

impl FindBarSnapshot {
    /// Decodes a snapshot, rejecting versions other than [`SNAPSHOT_VERSION`]
    pub fn from_toml_str(content: &str) -> Result<Self, FindBarError> {
        let probe: VersionProbe =
            toml::from_str(content).map_err(|e| FindBarError::InvalidSnapshot(e.to_string()))?;
        check_version(probe.version)?;

        toml::from_str(content).map_err(|e| FindBarError::InvalidSnapshot(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, FindBarError> {
        toml::to_string(self).map_err(|e| FindBarError::InvalidSnapshot(e.to_string()))
    }
}

fn check_version(version: u32) -> Result<(), FindBarError> {
    if version == SNAPSHOT_VERSION {
        Ok(())
    } else {
        Err(FindBarError::UnsupportedSnapshot {
            version,
            expected: SNAPSHOT_VERSION,
        })
    }
}

impl<D: FindInPageDelegate, S: SettingsStore> FindInPageBar<D, S> {
    pub fn snapshot(&self) -> FindBarSnapshot {
        FindBarSnapshot {
            version: SNAPSHOT_VERSION,
            query: self.text().to_string(),
            current_result: self.current_result,
            total_results: self.total_results,
        }
    }

    /// Rebuilds a bar from a snapshot.
    ///
    /// Restoring is not an edit: nothing is persisted and the delegate hears
    /// nothing.
    pub fn from_snapshot(
        snapshot: &FindBarSnapshot,
        delegate: D,
        settings: S,
    ) -> Result<Self, FindBarError> {
        check_version(snapshot.version)?;
        if snapshot.query.contains(['\n', '\r']) {
            return Err(FindBarError::InvalidSnapshot(
                "query spans more than one line".to_string(),
            ));
        }

        let mut bar = Self::new(delegate, settings);
        bar.replace_text(&snapshot.query);
        bar.match_count_hidden = snapshot.query.trim().is_empty();
        bar.set_total_results(snapshot.total_results);
        bar.set_current_result(snapshot.current_result);
        Ok(bar)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod snapshot_tests;
