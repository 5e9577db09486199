//! File-backed `tracing` setup.
//!
//! The terminal UI owns stdout, so log lines go to a file instead.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// `<cache dir>/coinboard/coinboard.log`, or `./coinboard.log` when the
/// platform has no cache dir.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("coinboard"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("coinboard.log")
}

/// Picks the log file: explicit override, then config, then the default.
pub fn resolve_log_path(config: &LoggingConfig, override_path: Option<&Path>) -> PathBuf {
    override_path
        .map(Path::to_path_buf)
        .or_else(|| config.file.clone())
        .unwrap_or_else(default_log_path)
}

/// Installs the global subscriber. `RUST_LOG` wins over `config.level`.
///
/// Returns the log file path, or `None` when logging could not be set up.
/// Failure here never stops the app.
pub fn init_logging(config: &LoggingConfig, override_path: Option<&Path>) -> Option<PathBuf> {
    let path = resolve_log_path(config, override_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .ok()?;

    Some(path)
}
