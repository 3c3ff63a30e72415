//! User preferences for UniCash
//!
//! Window geometry and the data-file location, persisted as JSON next to
//! the data directory. The terminal shell never reads the geometry but
//! keeps it intact so the file round-trips.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::UniCashPaths;
use crate::error::UniCashError;

/// Window geometry retained in the preferences file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiSettings {
    #[serde(default = "default_window_width")]
    pub window_width: f64,
    #[serde(default = "default_window_height")]
    pub window_height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_y: Option<i32>,
}

fn default_window_width() -> f64 {
    740.0
}

fn default_window_height() -> f64 {
    600.0
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            window_x: None,
            window_y: None,
        }
    }
}

/// User preferences for UniCash
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPrefs {
    #[serde(default)]
    pub gui_settings: GuiSettings,

    /// Overrides the default data-file location when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file_path: Option<PathBuf>,
}

impl UserPrefs {
    /// Where the transaction data lives: the preferences override, or
    /// the default under the data directory
    pub fn data_file(&self, paths: &UniCashPaths) -> PathBuf {
        self.data_file_path
            .clone()
            .unwrap_or_else(|| paths.data_file())
    }

    /// Load preferences from disk. A missing file means defaults; an
    /// unreadable one is reported and replaced by defaults.
    pub fn load_or_default(paths: &UniCashPaths) -> Self {
        let prefs_path = paths.preferences_file();
        if !prefs_path.exists() {
            return Self::default();
        }

        let contents = match std::fs::read_to_string(&prefs_path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read preferences file: {}", e);
                return Self::default();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!("Preferences file is not valid JSON, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Save preferences to disk
    pub fn save(&self, paths: &UniCashPaths) -> Result<(), UniCashError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| UniCashError::Config(format!("Failed to serialize preferences: {}", e)))?;

        std::fs::write(paths.preferences_file(), contents)
            .map_err(|e| UniCashError::Io(format!("Failed to write preferences file: {}", e)))?;

        Ok(())
    }
}
