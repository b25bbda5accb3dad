//! In-memory generation history

use crate::models::{HistoryAnalytics, HistoryEntry, HistoryExport, EXPORT_VERSION};
use chrono::{DateTime, Utc};
use missive_templates::GenerationResult;
use std::collections::HashSet;

/// Default number of entries kept
pub const DEFAULT_MAX_ITEMS: usize = 10;

/// Keeps generated messages newest-first, capped at a maximum size
#[derive(Debug, Clone)]
pub struct HistoryManager {
    entries: Vec<HistoryEntry>,
    max_items: usize,
}

impl HistoryManager {
    /// Create an empty history with the default size limit
    pub fn new() -> Self {
        Self::with_max_items(DEFAULT_MAX_ITEMS)
    }

    /// Create an empty history keeping at most `max_items` entries (at least one)
    pub fn with_max_items(max_items: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_items: max_items.max(1),
        }
    }

    /// Rebuild a history from stored entries
    ///
    /// Entries are re-sorted newest-first and truncated to the limit.
    pub fn from_entries(mut entries: Vec<HistoryEntry>, max_items: usize) -> Self {
        let max_items = max_items.max(1);
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries.truncate(max_items);
        Self { entries, max_items }
    }

    /// Record a generation result now
    pub fn add(&mut self, prompt: &str, result: &GenerationResult) -> &HistoryEntry {
        self.add_at(prompt, result, Utc::now())
    }

    /// Record a generation result at a given time
    pub fn add_at(
        &mut self,
        prompt: &str,
        result: &GenerationResult,
        timestamp: DateTime<Utc>,
    ) -> &HistoryEntry {
        self.entries
            .insert(0, HistoryEntry::from_result(prompt, result, timestamp));
        self.entries.truncate(self.max_items);
        &self.entries[0]
    }

    /// Look up an entry by id
    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Remove an entry, returning whether it existed
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, newest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Size limit
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Aggregate figures, with "today" measured against `now`
    pub fn analytics(&self, now: DateTime<Utc>) -> HistoryAnalytics {
        let today = now.date_naive();
        let categories: HashSet<&str> = self.entries.iter().map(|e| e.category.as_str()).collect();

        let avg_confidence = if self.entries.is_empty() {
            0
        } else {
            let sum: f64 = self.entries.iter().map(|e| e.confidence).sum();
            (sum / self.entries.len() as f64 * 100.0).round() as u32
        };

        HistoryAnalytics {
            total: self.entries.len(),
            today: self
                .entries
                .iter()
                .filter(|e| e.timestamp.date_naive() == today)
                .count(),
            categories: categories.len(),
            avg_confidence,
        }
    }

    /// Snapshot suitable for writing out
    pub fn export(&self, now: DateTime<Utc>) -> HistoryExport {
        HistoryExport {
            exported_at: now,
            history: self.entries.clone(),
            analytics: self.analytics(now),
            version: EXPORT_VERSION.to_string(),
        }
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn result(category: &str, confidence: f64) -> GenerationResult {
        GenerationResult {
            message: format!("{} message for {{name}}", category),
            category: category.to_string(),
            placeholders: vec!["name".to_string()],
            confidence,
            alternatives: vec![],
            suggestions: vec![],
            error: None,
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_add_keeps_newest_first() {
        let mut history = HistoryManager::new();
        history.add_at("first", &result("business", 0.9), noon());
        history.add_at("second", &result("diwali", 0.85), noon() + Duration::minutes(1));

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].prompt, "second");
        assert_eq!(history.entries()[1].prompt, "first");
    }

    #[test]
    fn test_add_enforces_limit() {
        let mut history = HistoryManager::with_max_items(3);
        for i in 0..5 {
            history.add_at(&format!("p{}", i), &result("business", 0.9), noon());
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.entries()[0].prompt, "p4");
        assert_eq!(history.entries()[2].prompt, "p2");
    }

    #[test]
    fn test_get_and_delete() {
        let mut history = HistoryManager::new();
        let id = history.add_at("p", &result("business", 0.9), noon()).id.clone();

        assert!(history.get(&id).is_some());
        assert!(history.delete(&id));
        assert!(!history.delete(&id));
        assert!(history.get(&id).is_none());
    }

    #[test]
    fn test_clear() {
        let mut history = HistoryManager::new();
        history.add("p", &result("business", 0.9));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_analytics() {
        let mut history = HistoryManager::new();
        history.add_at("a", &result("business", 0.9), noon() - Duration::days(2));
        history.add_at("b", &result("diwali", 0.85), noon());
        history.add_at("c", &result("diwali", 0.8), noon());

        let analytics = history.analytics(noon());
        assert_eq!(analytics.total, 3);
        assert_eq!(analytics.today, 2);
        assert_eq!(analytics.categories, 2);
        assert_eq!(analytics.avg_confidence, 85);
    }

    #[test]
    fn test_analytics_empty() {
        assert_eq!(HistoryManager::new().analytics(noon()), HistoryAnalytics::default());
    }

    #[test]
    fn test_from_entries_sorts_and_truncates() {
        let mut source = HistoryManager::new();
        source.add_at("old", &result("business", 0.9), noon() - Duration::hours(1));
        source.add_at("new", &result("business", 0.9), noon());
        let mut entries = source.entries().to_vec();
        entries.reverse();

        let history = HistoryManager::from_entries(entries, 1);
        assert_eq!(history.len(), 1);
        assert_eq!(history.entries()[0].prompt, "new");
    }

    #[test]
    fn test_export() {
        let mut history = HistoryManager::new();
        history.add_at("a", &result("business", 0.9), noon());

        let export = history.export(noon());
        assert_eq!(export.version, EXPORT_VERSION);
        assert_eq!(export.history.len(), 1);
        assert_eq!(export.analytics.total, 1);
        assert_eq!(export.exported_at, noon());
    }
}
