//! Property-based tests for category detection, selection and generation

use proptest::prelude::*;
use missive_templates::{
    Catalog, GenerationResult, MessageGenerator, TemplateSelector, GENERIC_CATEGORY,
    MAX_ALTERNATIVES,
};

fn generator() -> MessageGenerator {
    MessageGenerator::with_builtin_catalog().expect("builtin catalog loads")
}

/// Strategy for prompts mixing catalog keywords with filler words
fn prompt_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("diwali".to_string()),
            Just("Christmas".to_string()),
            Just("new year".to_string()),
            Just("birthday".to_string()),
            Just("discount".to_string()),
            Just("thanks".to_string()),
            Just("meeting".to_string()),
            Just("celebration".to_string()),
            "[a-z]{1,8}",
        ],
        0..6,
    )
    .prop_map(|words| words.join(" "))
}

proptest! {
    /// Property: detection always lands on a catalog category
    #[test]
    fn prop_detected_category_is_in_catalog(prompt in ".{0,80}") {
        let generator = generator();
        let category = generator.detect_category(&prompt).to_string();
        prop_assert!(generator.list_categories().contains(&category));
    }

    /// Property: detection ignores case and surrounding whitespace
    #[test]
    fn prop_detection_is_case_and_whitespace_insensitive(prompt in prompt_strategy()) {
        let generator = generator();
        let padded = format!("  {}\t", prompt.to_uppercase());
        prop_assert_eq!(generator.detect_category(&prompt), generator.detect_category(&padded));
    }

    /// Property: generate never fails for non-empty prompts and stays consistent
    #[test]
    fn prop_generate_result_is_consistent(prompt in prompt_strategy()) {
        prop_assume!(!prompt.is_empty());
        let generator = generator();
        let result: GenerationResult = generator.generate(prompt.as_str());

        prop_assert!(result.error.is_none());
        prop_assert!(result.alternatives.len() <= MAX_ALTERNATIVES);
        prop_assert!(!result.alternatives.contains(&result.message));
        prop_assert_eq!(result.category.as_str(), generator.detect_category(&prompt));
        prop_assert_eq!(
            result.suggestions.last().map(String::as_str),
            Some("Review the message tone to ensure it matches your brand voice")
        );
    }
}

#[test]
fn test_selected_template_has_maximum_confidence() {
    let catalog = Catalog::builtin().unwrap();
    let selector = TemplateSelector::new(&catalog);

    for category in catalog.categories() {
        let selected = selector.select(&category.name).unwrap();
        for template in &category.templates {
            assert!(selected.confidence >= template.confidence);
        }
    }
}

#[test]
fn test_empty_text_detects_default_category() {
    assert_eq!(generator().detect_category(""), "business");
}

#[test]
fn test_diwali_lamp_celebration() {
    assert_eq!(generator().detect_category("diwali lamp celebration"), "diwali");
}

#[test]
fn test_empty_and_absent_prompts_are_errors() {
    let generator = generator();
    for result in [generator.generate(""), generator.generate(None)] {
        assert!(result.error.as_deref().is_some_and(|e| !e.is_empty()));
        assert_eq!(result.category, GENERIC_CATEGORY);
    }
}

#[test]
fn test_validate_examples() {
    let generator = generator();

    let empty = generator.validate("");
    assert!(!empty.is_valid);
    assert_eq!(empty.errors.len(), 1);
    assert!(empty.warnings.is_empty());

    let short = generator.validate("Hi {name}");
    assert!(short.is_valid);
    assert_eq!(short.warnings, vec!["Message seems too short"]);
}

#[test]
fn test_every_category_generates_its_own_template() {
    let generator = generator();
    let prompts = [
        ("diwali", "deepavali greetings"),
        ("christmas", "xmas card for santa fans"),
        ("newyear", "a fresh start in january"),
        ("birthday", "birthday wishes"),
        ("business", "corporate partnership update"),
        ("promotional", "weekend sale with a special price"),
        ("thankyou", "gratitude note"),
        ("reminder", "appointment reminder"),
    ];

    for (expected, prompt) in prompts {
        let result = generator.generate(prompt);
        assert_eq!(result.category, expected, "prompt: {}", prompt);
        let selected = generator.select_template(expected).unwrap();
        assert_eq!(result.message, selected.body);
    }
}
