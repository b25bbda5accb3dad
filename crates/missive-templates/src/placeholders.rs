//! Placeholder extraction and substitution
//!
//! Placeholders are written as `{name}`. Substitution is literal and single-pass:
//! a substituted value is never scanned again, so values that happen to contain
//! `{other}` come through verbatim.

use crate::models::PlaceholderValues;
use heck::ToTitleCase;
use once_cell::sync::Lazy;
use regex::Regex;

static PLACEHOLDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^}]+)\}").expect("placeholder pattern is valid"));

/// Extracts and fills `{name}` placeholders
pub struct PlaceholderEngine;

impl PlaceholderEngine {
    /// Extract placeholder names in order of appearance, duplicates included
    ///
    /// # Examples
    ///
    /// ```
    /// use missive_templates::PlaceholderEngine;
    ///
    /// let names = PlaceholderEngine::extract("Hello {name}, welcome to {company}!");
    /// assert_eq!(names, vec!["name", "company"]);
    /// ```
    pub fn extract(text: &str) -> Vec<String> {
        PLACEHOLDER_PATTERN
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect()
    }

    /// Replace every `{name}` token that has a non-blank value with the trimmed value
    ///
    /// Tokens without a value, or whose value is blank, are left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use missive_templates::{PlaceholderEngine, PlaceholderValues};
    ///
    /// let mut values = PlaceholderValues::new();
    /// values.insert("name".to_string(), "  John ".to_string());
    /// let text = PlaceholderEngine::customize("Hello {name}! From {company}", &values);
    /// assert_eq!(text, "Hello John! From {company}");
    /// ```
    pub fn customize(template: &str, values: &PlaceholderValues) -> String {
        let mut replacements: Vec<(String, &str)> = values
            .iter()
            .filter_map(|(name, value)| {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some((format!("{{{}}}", name), trimmed))
                }
            })
            .collect();

        if replacements.is_empty() {
            return template.to_string();
        }

        // Longest token wins when several start at the same brace.
        replacements.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

        let mut customized = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(pos) = rest.find('{') {
            customized.push_str(&rest[..pos]);
            let candidate = &rest[pos..];

            match replacements
                .iter()
                .find(|(token, _)| candidate.starts_with(token.as_str()))
            {
                Some((token, value)) => {
                    customized.push_str(value);
                    rest = &candidate[token.len()..];
                }
                None => {
                    customized.push('{');
                    rest = &candidate[1..];
                }
            }
        }

        customized.push_str(rest);
        customized
    }

    /// Human-readable label for a placeholder name (`firstName` becomes `First Name`)
    pub fn label(name: &str) -> String {
        name.to_title_case()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> PlaceholderValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_extract_in_order_with_duplicates() {
        let names = PlaceholderEngine::extract("{a} and {b} then {a} again");
        assert_eq!(names, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_extract_empty_and_plain_text() {
        assert!(PlaceholderEngine::extract("").is_empty());
        assert!(PlaceholderEngine::extract("no tokens here").is_empty());
        assert!(PlaceholderEngine::extract("empty {} braces").is_empty());
    }

    #[test]
    fn test_customize_replaces_all_occurrences() {
        let text = PlaceholderEngine::customize("{name}, yes {name}!", &values(&[("name", "Ann")]));
        assert_eq!(text, "Ann, yes Ann!");
    }

    #[test]
    fn test_customize_skips_blank_values() {
        let text = PlaceholderEngine::customize(
            "Hi {name} from {company}",
            &values(&[("name", "   "), ("company", "")]),
        );
        assert_eq!(text, "Hi {name} from {company}");
    }

    #[test]
    fn test_customize_is_case_sensitive() {
        let text = PlaceholderEngine::customize("Hi {Name}", &values(&[("name", "Ann")]));
        assert_eq!(text, "Hi {Name}");
    }

    #[test]
    fn test_customize_does_not_expand_substituted_values() {
        let text = PlaceholderEngine::customize(
            "{greeting} {name}",
            &values(&[("greeting", "Hello {name}"), ("name", "Ann")]),
        );
        assert_eq!(text, "Hello {name} Ann");
    }

    #[test]
    fn test_customize_without_values_is_identity() {
        let template = "Dear {name}, see you on {date}.";
        assert_eq!(PlaceholderEngine::customize(template, &PlaceholderValues::new()), template);
    }

    #[test]
    fn test_customize_treats_regex_characters_literally() {
        let text = PlaceholderEngine::customize("Save {pct.off}% now", &values(&[("pct.off", "20")]));
        assert_eq!(text, "Save 20% now");
    }

    #[test]
    fn test_label() {
        assert_eq!(PlaceholderEngine::label("firstName"), "First Name");
        assert_eq!(PlaceholderEngine::label("company"), "Company");
        assert_eq!(PlaceholderEngine::label("due_date"), "Due Date");
    }
}
