//! Data models for message templates and generation results

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Values supplied by the caller for placeholder substitution, keyed by placeholder name
pub type PlaceholderValues = HashMap<String, String>;

/// An authored message body annotated with its placeholders and a fixed confidence score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Message body containing zero or more `{name}` tokens
    pub body: String,
    /// Placeholder names occurring in the body, in authoring order
    pub placeholders: Vec<String>,
    /// Category this template belongs to
    pub category: String,
    /// Author-assigned score in (0, 1], used for ranking within a category
    pub confidence: f64,
}

impl Template {
    /// Create a new template
    pub fn new(
        body: impl Into<String>,
        placeholders: Vec<String>,
        category: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            body: body.into(),
            placeholders,
            category: category.into(),
            confidence,
        }
    }
}

/// Result of a single `generate` call
///
/// Failure is carried in `error` rather than returned as an `Err`, so callers
/// always receive a usable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Selected message body, placeholders left unfilled
    pub message: String,
    /// Category of the selected message
    pub category: String,
    /// Placeholder names of the selected message
    pub placeholders: Vec<String>,
    /// Confidence of the selected message
    pub confidence: f64,
    /// Up to three other bodies from the same category
    pub alternatives: Vec<String>,
    /// Advisory suggestions for the caller
    pub suggestions: Vec<String>,
    /// Error detail when the prompt was unusable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResult {
    /// Whether this result was produced by the error path
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Outcome of validating a message
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// False only when the message is empty or absent
    pub is_valid: bool,
    /// Blocking problems
    pub errors: Vec<String>,
    /// Advisory, non-blocking problems
    pub warnings: Vec<String>,
}

/// Coarse confidence band used when presenting results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// Score of at least 0.8
    High,
    /// Score of at least 0.6
    Medium,
    /// Anything lower
    Low,
}

impl ConfidenceLevel {
    /// Classify a confidence score
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            ConfidenceLevel::High
        } else if score >= 0.6 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    /// Lowercase name of the band
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size summary of a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    /// Number of categories
    pub total_categories: usize,
    /// Number of templates across all categories
    pub total_templates: usize,
    /// Number of categories holding at least one template
    pub categories_with_templates: usize,
    /// Templates per category, rounded half away from zero
    pub average_templates_per_category: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_level_bands() {
        assert_eq!(ConfidenceLevel::from_score(0.9), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(0.8), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(0.79), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(0.6), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(0.5), ConfidenceLevel::Low);
    }

    #[test]
    fn test_generation_result_serializes_camel_case() {
        let result = GenerationResult {
            message: "Hi {name}".to_string(),
            category: "business".to_string(),
            placeholders: vec!["name".to_string()],
            confidence: 0.9,
            alternatives: vec![],
            suggestions: vec![],
            error: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["category"], "business");
        assert!(json.get("error").is_none());

        let validation = ValidationResult {
            is_valid: true,
            errors: vec![],
            warnings: vec![],
        };
        let json = serde_json::to_value(&validation).unwrap();
        assert_eq!(json["isValid"], true);
    }
}
