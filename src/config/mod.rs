use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::{
    errors::{DonationError, Result},
    services::DEFAULT_RECENT_WINDOW_DAYS,
    utils::{ensure_dir, write_atomic, PathResolver},
};

/// User preferences for the reporting shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_window_days_value")]
    pub default_window_days: i64,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_snapshot: Option<String>,
    /// Overrides where snapshots are stored. Defaults to the app data dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_window_days: Self::default_window_days_value(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            last_snapshot: None,
            data_root: None,
        }
    }
}

impl Config {
    pub fn default_window_days_value() -> i64 {
        DEFAULT_RECENT_WINDOW_DAYS
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn set_window_days(&mut self, days: i64) -> Result<()> {
        if days < 0 {
            return Err(DonationError::ConfigError(format!(
                "window must be zero or more days, got {days}"
            )));
        }
        self.default_window_days = days;
        Ok(())
    }
}

/// Loads and persists [`Config`] under the application data directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        ensure_dir(&PathResolver::config_dir_in(&base))?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    /// Returns the stored configuration, or defaults when none was saved yet.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            DonationError::ConfigError(format!("{}: {err}", self.path.display()))
        })
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
