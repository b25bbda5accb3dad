//! Data models for generation history

use chrono::{DateTime, Utc};
use missive_templates::GenerationResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Version stamped on exported history documents
pub const EXPORT_VERSION: &str = "1.0.0";

/// One generated message as remembered by the history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique entry identifier
    pub id: String,
    /// When the message was generated
    pub timestamp: DateTime<Utc>,
    /// Prompt the user typed
    pub prompt: String,
    /// Generated message body
    pub message: String,
    /// Category of the generated message
    pub category: String,
    /// Confidence of the generated message
    pub confidence: f64,
}

impl HistoryEntry {
    /// Create an entry from a generation result
    pub fn from_result(
        prompt: impl Into<String>,
        result: &GenerationResult,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp,
            prompt: prompt.into(),
            message: result.message.clone(),
            category: result.category.clone(),
            confidence: result.confidence,
        }
    }

    /// First `max_chars` characters of the message, with an ellipsis when cut
    pub fn message_preview(&self, max_chars: usize) -> String {
        let mut chars = self.message.chars();
        let preview: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}...", preview)
        } else {
            preview
        }
    }
}

/// Aggregate figures over the history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryAnalytics {
    /// Number of entries
    pub total: usize,
    /// Entries generated on the current UTC day
    pub today: usize,
    /// Distinct categories among entries
    pub categories: usize,
    /// Mean confidence as a rounded percentage, 0 when empty
    pub avg_confidence: u32,
}

/// Portable snapshot of the history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryExport {
    /// When the export was produced
    pub exported_at: DateTime<Utc>,
    /// Entries, newest first
    pub history: Vec<HistoryEntry>,
    /// Analytics at export time
    pub analytics: HistoryAnalytics,
    /// Export format version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> HistoryEntry {
        HistoryEntry {
            id: "1".to_string(),
            timestamp: Utc::now(),
            prompt: "p".to_string(),
            message: message.to_string(),
            category: "business".to_string(),
            confidence: 0.9,
        }
    }

    #[test]
    fn test_message_preview_truncates() {
        let e = entry("abcdefghij");
        assert_eq!(e.message_preview(4), "abcd...");
        assert_eq!(e.message_preview(10), "abcdefghij");
        assert_eq!(e.message_preview(20), "abcdefghij");
    }

    #[test]
    fn test_from_result_copies_fields() {
        let result = GenerationResult {
            message: "Hi {name}".to_string(),
            category: "business".to_string(),
            placeholders: vec!["name".to_string()],
            confidence: 0.85,
            alternatives: vec![],
            suggestions: vec![],
            error: None,
        };
        let now = Utc::now();
        let e = HistoryEntry::from_result("hello", &result, now);
        assert_eq!(e.prompt, "hello");
        assert_eq!(e.message, "Hi {name}");
        assert_eq!(e.confidence, 0.85);
        assert_eq!(e.timestamp, now);
        assert!(Uuid::parse_str(&e.id).is_ok());
    }
}
