//! Keyword-frequency category detection

use crate::catalog::KeywordMap;
use tracing::debug;

/// Picks a category for free text by summing the lengths of the keyword
/// phrases it contains
///
/// Each phrase counts once no matter how often it occurs. Categories are
/// visited in keyword map order and only a strictly higher score replaces the
/// current best, so the earliest category wins ties. When nothing matches the
/// default category is returned.
#[derive(Debug, Clone)]
pub struct CategoryDetector {
    keywords: KeywordMap,
    default_category: String,
}

impl CategoryDetector {
    /// Create a detector over a keyword map
    pub fn new(keywords: KeywordMap, default_category: impl Into<String>) -> Self {
        Self {
            keywords,
            default_category: default_category.into(),
        }
    }

    /// Detect the category of `text`
    ///
    /// Input is lower-cased and trimmed before matching.
    pub fn detect(&self, text: &str) -> &str {
        let normalized = text.trim().to_lowercase();

        let mut best = self.default_category.as_str();
        let mut highest = 0;

        for (category, phrases) in self.keywords.iter() {
            let score = Self::score(&normalized, phrases);
            if score > highest {
                highest = score;
                best = category;
            }
        }

        debug!("Detected category '{}' with score {}", best, highest);
        best
    }

    /// Score of every category, in keyword map order
    pub fn scores(&self, text: &str) -> Vec<(&str, usize)> {
        let normalized = text.trim().to_lowercase();
        self.keywords
            .iter()
            .map(|(category, phrases)| (category, Self::score(&normalized, phrases)))
            .collect()
    }

    /// Category returned when nothing matches
    pub fn default_category(&self) -> &str {
        &self.default_category
    }

    fn score(text: &str, phrases: &[String]) -> usize {
        phrases
            .iter()
            .filter(|phrase| text.contains(phrase.as_str()))
            .map(|phrase| phrase.chars().count())
            .sum()
    }
}
