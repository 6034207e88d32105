//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output goes to
//! `<log_dir>/studyhub.log` (default: `~/.local/share/studyhub/logs/`). The
//! `STUDYHUB_LOG` environment variable overrides the configured level using
//! the usual `EnvFilter` syntax.

use crate::config::{expand_home, LoggingConfig};
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_NAME: &str = "studyhub.log";
const ENV_FILTER_VAR: &str = "STUDYHUB_LOG";

pub fn log_file_path(config: &LoggingConfig) -> PathBuf {
    expand_home(&config.log_dir).join(LOG_FILE_NAME)
}

fn filter_for(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(ENV_FILTER_VAR)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Returns `Ok(None)` when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }
    let path = log_file_path(config);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(filter_for(config))
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        platform = std::env::consts::OS,
        "studyhub starting"
    );
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_logging_installs_nothing() {
        let config = LoggingConfig {
            enabled: false,
            ..Default::default()
        };
        assert_eq!(init(&config).unwrap(), None);
    }

    #[test]
    fn log_file_lives_in_configured_dir() {
        let config = LoggingConfig {
            log_dir: "/tmp/studyhub-logs".into(),
            ..Default::default()
        };
        assert_eq!(
            log_file_path(&config),
            PathBuf::from("/tmp/studyhub-logs/studyhub.log")
        );
    }
}
