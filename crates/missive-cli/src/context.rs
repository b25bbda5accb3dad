// Shared state built once per invocation

use std::path::Path;

use missive_config::{AppConfig, ConfigManager};
use missive_history::{HistoryEntry, HistoryManager, HistoryStore};
use missive_templates::{Catalog, GenerationResult, MessageGenerator};
use tracing::{debug, warn};

use crate::error::CliResult;

/// Configuration, generator and history store for one command run
pub struct AppContext {
    /// Loaded configuration
    pub config: AppConfig,
    /// Generator over the configured catalog
    pub generator: MessageGenerator,
    history_store: HistoryStore,
    record_history: bool,
}

impl AppContext {
    /// Load and validate configuration from `path`, or the default location
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load_config(path: Option<&Path>) -> CliResult<AppConfig> {
        let manager = match path {
            Some(path) => ConfigManager::with_path(path.to_path_buf()).require_file(),
            None => ConfigManager::new(),
        };
        let config = manager.load_config()?;
        manager.validate_config(&config)?;
        Ok(config)
    }

    /// Build the context from a loaded configuration
    ///
    /// `no_history` turns off recording for this run without touching the
    /// configured setting.
    pub fn new(config: AppConfig, no_history: bool) -> CliResult<Self> {
        let generator = match &config.catalog.path {
            Some(path) => {
                debug!("Using catalog from {:?}", path);
                MessageGenerator::new(Catalog::load_from_file(path)?)
            }
            None => MessageGenerator::with_builtin_catalog()?,
        };

        let history_store = match &config.history.path {
            Some(path) => HistoryStore::with_path(path.clone()),
            None => HistoryStore::new()?,
        };

        let record_history = config.history.enabled && !no_history;

        Ok(Self {
            config,
            generator,
            history_store,
            record_history,
        })
    }

    /// Whether generated messages are recorded
    pub fn records_history(&self) -> bool {
        self.record_history
    }

    /// History store in use
    pub fn history_store(&self) -> &HistoryStore {
        &self.history_store
    }

    /// Load the stored history with the configured limit
    pub fn load_history(&self) -> CliResult<HistoryManager> {
        Ok(self.history_store.load(self.config.history.max_items)?)
    }

    /// Persist the history
    pub fn save_history(&self, history: &HistoryManager) -> CliResult<()> {
        Ok(self.history_store.save(history)?)
    }

    /// Record a generation result when history is on
    pub fn record(
        &self,
        prompt: &str,
        result: &GenerationResult,
    ) -> CliResult<Option<HistoryEntry>> {
        if !self.record_history {
            debug!("History recording disabled, skipping");
            return Ok(None);
        }
        if result.is_error() {
            warn!("Skipping history entry for failed generation");
            return Ok(None);
        }

        let mut history = self.load_history()?;
        let entry = history.add(prompt, result).clone();
        self.save_history(&history)?;
        Ok(Some(entry))
    }
}
