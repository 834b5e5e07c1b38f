//! `tracing` subscriber setup for the console binary.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, TriageConfig};

/// Builds the filter from `RUST_LOG`, falling back to `config.log_filter`.
pub fn env_filter(config: &TriageConfig) -> Result<EnvFilter, ConfigError> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.is_empty() => parse_filter(&directives),
        _ => parse_filter(&config.log_filter),
    }
}

fn parse_filter(directives: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(directives).map_err(|e| ConfigError::InvalidLogFilter {
        filter: directives.to_string(),
        reason: e.to_string(),
    })
}

/// Installs a plain-text subscriber appending to `log_path`.
///
/// The terminal belongs to the TUI, so nothing is written to stdout.
#[mutants::skip]
pub fn init(config: &TriageConfig, log_path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(log_path)?;
    let filter = env_filter(config)?;

    // A second init (tests, embedding) keeps the first subscriber.
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
    {
        tracing::debug!("keeping existing tracing subscriber: {e}");
    }
    Ok(())
}
