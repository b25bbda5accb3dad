//! Generation history for missive
//!
//! Remembers recently generated messages newest-first, computes simple
//! analytics over them and persists them as JSON.

#![warn(missing_docs)]

pub mod error;
pub mod format;
pub mod history;
pub mod models;
pub mod store;

pub use error::{HistoryError, HistoryResult};
pub use format::relative_time;
pub use history::{HistoryManager, DEFAULT_MAX_ITEMS};
pub use models::{HistoryAnalytics, HistoryEntry, HistoryExport, EXPORT_VERSION};
pub use store::HistoryStore;
