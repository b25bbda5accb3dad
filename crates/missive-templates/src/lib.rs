//! Template selection and customization engine for missive
//!
//! Infers an intent category from a free-text prompt, picks the best matching
//! pre-authored template, and hands back the template with alternatives and
//! placeholder names for the caller to fill in.
//!
//! - [`Catalog`]: categories, templates and keyword phrases, loaded from YAML
//! - [`CategoryDetector`]: keyword-length scoring with a default fallback
//! - [`TemplateSelector`]: confidence ranking and alternatives
//! - [`PlaceholderEngine`]: `{name}` extraction and substitution
//! - [`MessageValidator`]: advisory checks on final text
//! - [`MessageGenerator`]: the facade used by callers
//!
//! # Examples
//!
//! ```
//! use missive_templates::{MessageGenerator, PlaceholderValues};
//!
//! let generator = MessageGenerator::with_builtin_catalog().unwrap();
//! let result = generator.generate("Remind the client about the appointment");
//! assert_eq!(result.category, "reminder");
//!
//! let mut values = PlaceholderValues::new();
//! values.insert("name".to_string(), "Sam".to_string());
//! let text = generator.customize(result.message.as_str(), Some(&values)).unwrap();
//! assert!(text.starts_with("Dear Sam,"));
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod detector;
pub mod error;
pub mod generator;
pub mod models;
pub mod placeholders;
pub mod selector;
pub mod suggestions;
pub mod validation;

pub use catalog::{Catalog, Category, KeywordMap};
pub use detector::CategoryDetector;
pub use error::{Result, TemplateError};
pub use generator::{MessageGenerator, GENERIC_CATEGORY};
pub use models::{
    CatalogStats, ConfidenceLevel, GenerationResult, PlaceholderValues, Template,
    ValidationResult,
};
pub use placeholders::PlaceholderEngine;
pub use selector::{TemplateSelector, MAX_ALTERNATIVES};
pub use suggestions::suggestions_for;
pub use validation::{MessageValidator, MAX_MESSAGE_LENGTH, MIN_MESSAGE_LENGTH};
