//! Application configuration.
//!
//! Loaded once at startup from `~/.config/coinboard/config.toml` (or the path
//! given with `--config`). A missing file yields the defaults.

mod loader;
mod types;

pub use loader::{ConfigError, ConfigOverrides};
pub use types::{ApiConfig, Config, LoggingConfig, ViewConfig};
