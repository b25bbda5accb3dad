//! Message generation facade
//!
//! Ties the catalog, detector, selector, placeholder engine and validator
//! together behind the operations exposed to presentation and storage layers.
//! Every operation on a built generator is total: bad prompts produce a result
//! carrying an `error` field instead of an `Err`.

use crate::catalog::Catalog;
use crate::detector::CategoryDetector;
use crate::error::{Result, TemplateError};
use crate::models::{CatalogStats, GenerationResult, PlaceholderValues, Template, ValidationResult};
use crate::placeholders::PlaceholderEngine;
use crate::selector::TemplateSelector;
use crate::suggestions::{self, GENERIC_KEYWORDS_SUGGESTION, GENERIC_OCCASION_SUGGESTION};
use crate::validation::MessageValidator;
use tracing::{debug, warn};

/// Category reported by the error and generic fallback paths
pub const GENERIC_CATEGORY: &str = "generic";

const INVALID_PROMPT_ERROR: &str = "Invalid prompt provided";

const ERROR_MESSAGE: &str =
    "Hello {name}, Thank you for your message. We appreciate your interest.";
const ERROR_CONFIDENCE: f64 = 0.5;

const GENERIC_MESSAGE: &str = "Hello {name}, Thank you for reaching out. We appreciate your interest and will get back to you soon. Best regards, {company}";
const GENERIC_ALTERNATIVES: [&str; 2] = [
    "Dear {name}, We have received your message and will respond shortly. Thank you for contacting {company}.",
    "Hi {name}, Thanks for your message. Our team will review it and get back to you as soon as possible.",
];
const GENERIC_CONFIDENCE: f64 = 0.6;

/// Template-based message generator
///
/// # Examples
///
/// ```
/// use missive_templates::MessageGenerator;
///
/// let generator = MessageGenerator::with_builtin_catalog().unwrap();
/// let result = generator.generate("Send Diwali wishes to customers");
/// assert_eq!(result.category, "diwali");
/// assert!(result.message.contains("{name}"));
/// ```
#[derive(Debug, Clone)]
pub struct MessageGenerator {
    catalog: Catalog,
    detector: CategoryDetector,
}

impl MessageGenerator {
    /// Create a generator over a validated catalog
    pub fn new(catalog: Catalog) -> Self {
        let detector = CategoryDetector::new(catalog.keywords().clone(), catalog.default_category());
        Self { catalog, detector }
    }

    /// Create a generator over the built-in catalog
    pub fn with_builtin_catalog() -> Result<Self> {
        Ok(Self::new(Catalog::builtin()?))
    }

    /// The catalog this generator draws from
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Generate a message for a free-text prompt
    ///
    /// An empty or absent prompt yields the generic apology with `error` set.
    pub fn generate<'p>(&self, prompt: impl Into<Option<&'p str>>) -> GenerationResult {
        let prompt = match prompt.into() {
            Some(p) if !p.is_empty() => p,
            _ => {
                warn!("Error generating message: {}", INVALID_PROMPT_ERROR);
                return Self::error_result(INVALID_PROMPT_ERROR);
            }
        };

        let normalized = prompt.trim().to_lowercase();
        let category = self.detector.detect(&normalized);

        let selector = TemplateSelector::new(&self.catalog);
        let template = match selector.select(category) {
            Some(template) => template,
            None => {
                debug!("No template for category '{}', using generic message", category);
                return Self::generic_result();
            }
        };

        debug!(
            "Selected template from '{}' with confidence {}",
            template.category, template.confidence
        );

        GenerationResult {
            message: template.body.clone(),
            category: template.category.clone(),
            placeholders: template.placeholders.clone(),
            confidence: template.confidence,
            alternatives: selector.alternatives(category, template),
            suggestions: suggestions::suggestions_for(template),
            error: None,
        }
    }

    /// Detect the category of a piece of text
    pub fn detect_category(&self, text: &str) -> &str {
        self.detector.detect(text)
    }

    /// Highest-confidence template of a category
    pub fn select_template(&self, category: &str) -> Option<&Template> {
        TemplateSelector::new(&self.catalog).select(category)
    }

    /// Up to three other bodies from a category
    pub fn alternatives(&self, category: &str, selected: &Template) -> Vec<String> {
        TemplateSelector::new(&self.catalog).alternatives(category, selected)
    }

    /// Fill placeholders in a template body
    ///
    /// Without values the template comes back unchanged. A missing template is
    /// reported as [`TemplateError::InvalidTemplate`].
    pub fn customize<'t>(
        &self,
        template: impl Into<Option<&'t str>>,
        values: Option<&PlaceholderValues>,
    ) -> Result<String> {
        let template = template
            .into()
            .ok_or_else(|| TemplateError::InvalidTemplate("no template provided".to_string()))?;

        Ok(match values {
            Some(values) => PlaceholderEngine::customize(template, values),
            None => template.to_string(),
        })
    }

    /// Placeholder names in order of appearance
    pub fn extract_placeholders<'t>(&self, text: impl Into<Option<&'t str>>) -> Vec<String> {
        text.into().map(PlaceholderEngine::extract).unwrap_or_default()
    }

    /// Validate a message
    pub fn validate<'m>(&self, message: impl Into<Option<&'m str>>) -> ValidationResult {
        MessageValidator::validate(message.into())
    }

    /// Category names in catalog order
    pub fn list_categories(&self) -> Vec<String> {
        self.catalog.category_names()
    }

    /// Templates of one category
    pub fn category_templates(&self, category: &str) -> Option<&[Template]> {
        self.catalog.templates(category)
    }

    /// Catalog size summary
    pub fn stats(&self) -> CatalogStats {
        self.catalog.stats()
    }

    fn error_result(detail: &str) -> GenerationResult {
        GenerationResult {
            message: ERROR_MESSAGE.to_string(),
            category: GENERIC_CATEGORY.to_string(),
            placeholders: vec!["name".to_string()],
            confidence: ERROR_CONFIDENCE,
            alternatives: Vec::new(),
            suggestions: Vec::new(),
            error: Some(detail.to_string()),
        }
    }

    // Only reachable if a detected category has no templates, which catalog
    // validation rules out for generators built through `new`.
    fn generic_result() -> GenerationResult {
        GenerationResult {
            message: GENERIC_MESSAGE.to_string(),
            category: GENERIC_CATEGORY.to_string(),
            placeholders: vec!["name".to_string(), "company".to_string()],
            confidence: GENERIC_CONFIDENCE,
            alternatives: GENERIC_ALTERNATIVES.iter().map(|s| s.to_string()).collect(),
            suggestions: vec![
                GENERIC_KEYWORDS_SUGGESTION.to_string(),
                GENERIC_OCCASION_SUGGESTION.to_string(),
            ],
            error: None,
        }
    }
}
