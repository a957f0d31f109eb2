//! Application configuration.
//!
//! Loaded from a TOML file in the platform data directory. Every table is
//! optional; missing keys fall back to defaults. Progress data itself is
//! never written to disk.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::progress::Profile;
use crate::workouts::{DEFAULT_CALORIES_PER_MINUTE, TICK_PERIOD};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Profile used to seed the progress store
    pub profile: Profile,
    /// Workout settings
    pub workout: WorkoutSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Workout-related settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorkoutSettings {
    /// Workout timer tick in milliseconds; each tick counts one second
    pub tick_interval_ms: u64,
    /// Calories credited per whole minute on the workout timer
    pub calories_per_minute: u32,
}

impl WorkoutSettings {
    /// Timer tick period, never shorter than one millisecond.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

impl Default for WorkoutSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_PERIOD.as_millis() as u64,
            calories_per_minute: DEFAULT_CALORIES_PER_MINUTE,
        }
    }
}

/// Logging-related settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Get the application data directory.
fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "fittune", "FitTune")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from `path`; a missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    tracing::debug!(path = %path.display(), "Loaded config");

    Ok(config)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
