//! User settings for the budget tracker
//!
//! Holds the capacity bounds enforced by the engine and a couple of display
//! preferences. Settings are read from `config.json` when present.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// User settings for the budget tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Maximum number of transactions in one session
    #[serde(default = "default_max_transactions")]
    pub max_transactions: usize,

    /// Maximum number of budget categories
    #[serde(default = "default_max_categories")]
    pub max_categories: usize,

    /// Number of notifications kept before the oldest is evicted
    #[serde(default = "default_max_notifications")]
    pub max_notifications: usize,

    /// Maximum category name length (chars)
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,

    /// Descriptions longer than this are truncated
    #[serde(default = "default_max_text_length")]
    pub max_description_length: usize,

    /// Notification messages longer than this are truncated
    #[serde(default = "default_max_text_length")]
    pub max_message_length: usize,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Timestamp format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_max_transactions() -> usize {
    1000
}

fn default_max_categories() -> usize {
    50
}

fn default_max_notifications() -> usize {
    50
}

fn default_max_name_length() -> usize {
    50
}

fn default_max_text_length() -> usize {
    99
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_transactions: default_max_transactions(),
            max_categories: default_max_categories(),
            max_notifications: default_max_notifications(),
            max_name_length: default_max_name_length(),
            max_description_length: default_max_text_length(),
            max_message_length: default_max_text_length(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Check that every capacity bound is usable
    pub fn validate(&self) -> Result<(), TrackerError> {
        let bounds = [
            ("max_transactions", self.max_transactions),
            ("max_categories", self.max_categories),
            ("max_notifications", self.max_notifications),
            ("max_name_length", self.max_name_length),
        ];

        for (name, value) in bounds {
            if value == 0 {
                return Err(TrackerError::Config(format!("{} must be at least 1", name)));
            }
        }

        Ok(())
    }

    /// Load settings from disk, or fall back to defaults if no file exists
    pub fn load_or_default(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
