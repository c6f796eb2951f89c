//! Logging and tracing initialization.
//!
//! Logs go to stderr by default. When a log file or directory is
//! configured (via config or `RHYMELENS_LOG_PATH` / `RHYMELENS_LOG_DIR`),
//! JSONL logs are written there through a non-blocking appender instead,
//! keeping stdout clean for command output either way.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Where log output should go.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (wins over `log_dir`).
    pub log_path: Option<PathBuf>,
    /// Directory for a `rhymelens.log` file.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with the config file's log dir as
    /// a fallback.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("RHYMELENS_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("RHYMELENS_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }

    fn resolved_path(&self) -> Option<PathBuf> {
        self.log_path
            .clone()
            .or_else(|| self.log_dir.as_ref().map(|dir| dir.join("rhymelens.log")))
    }
}

/// Build the log filter from CLI verbosity flags and the configured level.
///
/// `RUST_LOG` takes precedence when set.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(format!("rhymelens={level},rhymelens_core={level}"))
}

/// Initialize the global tracing subscriber.
///
/// Returns a worker guard that must be held for the process lifetime when
/// file logging is active, so buffered lines flush on exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    if let Some(path) = config.resolved_path() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create log directory {}", parent.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_writer(writer)
            .init();
        return Ok(Some(guard));
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
    Ok(None)
}
