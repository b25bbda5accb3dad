//! Configuration manager implementation

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use tracing::{debug, info};

use crate::{
    error::{ConfigError, Result},
    types::{AppConfig, LOG_LEVELS},
};

/// Prefix of environment variables that override the config file
pub const ENV_PREFIX: &str = "MISSIVE";

/// Configuration manager
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
    /// Fail instead of falling back to defaults when the file is missing
    require_file: bool,
}

impl ConfigManager {
    /// Create a new configuration manager
    pub fn new() -> Self {
        Self::with_path(Self::default_config_path())
    }

    /// Create with custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            env_prefix: ENV_PREFIX.to_string(),
            require_file: false,
        }
    }

    /// Treat a missing configuration file as an error
    pub fn require_file(mut self) -> Self {
        self.require_file = true;
        self
    }

    /// Override the environment prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Configuration file path
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get default config path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("missive")
            .join("config.toml")
    }

    /// Load configuration from the file (if present) and the environment
    ///
    /// Environment variables win over the file. Sections are separated by a
    /// double underscore, so `MISSIVE_HISTORY__MAX_ITEMS=20` sets
    /// `history.max_items`.
    pub fn load_config(&self) -> Result<AppConfig> {
        debug!("Loading configuration from {:?}", self.config_path);

        if self.require_file && !self.config_path.is_file() {
            return Err(ConfigError::NotFound(
                self.config_path.display().to_string(),
            ));
        }

        let builder = Config::builder()
            .add_source(
                File::from(self.config_path.clone())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;
        Ok(app_config)
    }

    /// Write configuration as TOML, creating the parent directory
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        let toml = toml::to_string(config)?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        info!("Configuration saved to {:?}", self.config_path);
        Ok(())
    }

    /// Check values the loader cannot reject on its own
    pub fn validate_config(&self, config: &AppConfig) -> Result<()> {
        if config.history.max_items == 0 {
            return Err(ConfigError::Validation(
                "history.max_items must be greater than 0".to_string(),
            ));
        }
        let level = config.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}' (expected one of: {})",
                config.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
