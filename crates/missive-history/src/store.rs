//! History persistence to disk

use crate::error::{HistoryError, HistoryResult};
use crate::history::HistoryManager;
use crate::models::{HistoryEntry, HistoryExport};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Persists history entries as a JSON array in a single file
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Create a store at the default location (~/.missive/history.json)
    pub fn new() -> HistoryResult<Self> {
        Ok(Self {
            path: Self::default_path()?,
        })
    }

    /// Create a store backed by a specific file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default history file location
    pub fn default_path() -> HistoryResult<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| {
            HistoryError::Storage("Could not determine home directory".to_string())
        })?;
        Ok(home.join(".missive").join("history.json"))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load stored history
    ///
    /// A missing file is an empty history. A file that cannot be parsed is
    /// logged and also treated as empty, so a damaged file never blocks
    /// generation.
    pub fn load(&self, max_items: usize) -> HistoryResult<HistoryManager> {
        if !self.path.exists() {
            debug!("No history file at {:?}", self.path);
            return Ok(HistoryManager::with_max_items(max_items));
        }

        let json_data = fs::read_to_string(&self.path)?;
        let entries: Vec<HistoryEntry> = match serde_json::from_str(&json_data) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to load history from {:?}: {}", self.path, e);
                Vec::new()
            }
        };

        debug!("Loaded {} history entries from {:?}", entries.len(), self.path);
        Ok(HistoryManager::from_entries(entries, max_items))
    }

    /// Write the history, creating parent directories as needed
    pub fn save(&self, history: &HistoryManager) -> HistoryResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json_data = serde_json::to_string_pretty(history.entries())?;
        fs::write(&self.path, json_data)?;

        info!("Saved {} history entries to {:?}", history.len(), self.path);
        Ok(())
    }

    /// Write an export document to a user-chosen file
    pub fn write_export(export: &HistoryExport, export_path: &Path) -> HistoryResult<()> {
        let json_data = serde_json::to_string_pretty(export)?;
        fs::write(export_path, json_data)?;

        info!("History exported to {:?}", export_path);
        Ok(())
    }
}
