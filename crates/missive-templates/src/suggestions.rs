//! Advisory suggestions attached to generation results

use crate::models::Template;

pub(crate) const CUSTOMIZE_ALL_SUGGESTION: &str =
    "Consider customizing all placeholders for better personalization";
pub(crate) const BE_SPECIFIC_SUGGESTION: &str =
    "Try being more specific in your prompt for better matches";
pub(crate) const TONE_CHECK_SUGGESTION: &str =
    "Review the message tone to ensure it matches your brand voice";

pub(crate) const GENERIC_KEYWORDS_SUGGESTION: &str =
    "Consider adding more specific keywords to get better template matches";
pub(crate) const GENERIC_OCCASION_SUGGESTION: &str =
    "Try mentioning the occasion or purpose of your message";

/// Suggestions for a selected template
///
/// Conditional suggestions come first; the tone check is always last.
pub fn suggestions_for(template: &Template) -> Vec<String> {
    let mut suggestions = Vec::new();

    if template.placeholders.len() > 2 {
        suggestions.push(CUSTOMIZE_ALL_SUGGESTION.to_string());
    }

    if template.confidence < 0.8 {
        suggestions.push(BE_SPECIFIC_SUGGESTION.to_string());
    }

    suggestions.push(TONE_CHECK_SUGGESTION.to_string());
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(placeholders: &[&str], confidence: f64) -> Template {
        let body = placeholders
            .iter()
            .map(|p| format!("{{{}}}", p))
            .collect::<Vec<_>>()
            .join(" ");
        Template::new(
            body,
            placeholders.iter().map(|p| p.to_string()).collect(),
            "misc",
            confidence,
        )
    }

    #[test]
    fn test_tone_check_only() {
        let suggestions = suggestions_for(&template(&["name", "company"], 0.9));
        assert_eq!(suggestions, vec![TONE_CHECK_SUGGESTION]);
    }

    #[test]
    fn test_many_placeholders() {
        let suggestions = suggestions_for(&template(&["name", "service", "contact"], 0.85));
        assert_eq!(suggestions, vec![CUSTOMIZE_ALL_SUGGESTION, TONE_CHECK_SUGGESTION]);
    }

    #[test]
    fn test_all_conditions_in_order() {
        let suggestions = suggestions_for(&template(&["a", "b", "c"], 0.7));
        assert_eq!(
            suggestions,
            vec![CUSTOMIZE_ALL_SUGGESTION, BE_SPECIFIC_SUGGESTION, TONE_CHECK_SUGGESTION]
        );
    }

    #[test]
    fn test_confidence_threshold_is_exclusive() {
        let suggestions = suggestions_for(&template(&["name"], 0.8));
        assert_eq!(suggestions, vec![TONE_CHECK_SUGGESTION]);
    }
}
