//! Missive configuration management
//!
//! Loads [`AppConfig`] from an optional TOML file layered under `MISSIVE_`
//! environment variables, validates it and writes it back.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::{ConfigManager, ENV_PREFIX};
pub use types::{AppConfig, CatalogConfig, HistoryConfig, LoggingConfig, LOG_LEVELS};
