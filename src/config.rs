//! Optional JSON configuration at `<config dir>/thrustr/triage.json`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::triage::DEFAULT_HISTORY_CAPACITY;

/// Largest `history_capacity` accepted from a config file.
pub const MAX_HISTORY_CAPACITY: usize = 10_000;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The config file is not valid JSON for [`TriageConfig`].
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform does not provide a config directory.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// The log filter directive could not be parsed.
    #[error("invalid log filter {filter:?}: {reason}")]
    InvalidLogFilter {
        /// The rejected directive.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// `history_capacity` exceeds [`MAX_HISTORY_CAPACITY`].
    #[error("history_capacity {value} exceeds the maximum of {max}")]
    HistoryCapacityTooLarge {
        /// The configured capacity.
        value: usize,
        /// The accepted maximum.
        max: usize,
    },
}

/// Tunables for the triage service and its console.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Maximum number of records kept in history.
    pub history_capacity: usize,
    /// Number of records returned by `recent_errors_default`.
    pub recent_limit: usize,
    /// `tracing-subscriber` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            recent_limit: 10,
            log_filter: "info".to_string(),
        }
    }
}

impl TriageConfig {
    /// Loads the config from the platform config directory.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&default_config_path()?)
    }

    /// Loads the config from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the service cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity > MAX_HISTORY_CAPACITY {
            return Err(ConfigError::HistoryCapacityTooLarge {
                value: self.history_capacity,
                max: MAX_HISTORY_CAPACITY,
            });
        }
        Ok(())
    }
}

/// Returns `<config dir>/thrustr/triage.json`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_dir.join("thrustr").join("triage.json"))
}
