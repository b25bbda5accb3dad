//! Template catalog and keyword map
//!
//! The catalog is declarative data: the built-in one is a YAML asset compiled
//! into the crate, and alternative catalogs can be loaded from disk. Both the
//! category list and the keyword map keep file order, which is the order used
//! for tie-breaking during detection and selection.

use crate::error::{Result, TemplateError};
use crate::models::{CatalogStats, Template};
use crate::placeholders::PlaceholderEngine;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.yaml");

/// A named category and its templates in authoring order
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Category name
    pub name: String,
    /// Templates in authoring order
    pub templates: Vec<Template>,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, templates: Vec<Template>) -> Self {
        Self {
            name: name.into(),
            templates,
        }
    }
}

/// Ordered mapping from category name to keyword phrases
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordMap {
    entries: Vec<(String, Vec<String>)>,
}

impl KeywordMap {
    /// Build a keyword map, lower-casing every phrase
    pub fn new(entries: Vec<(String, Vec<String>)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(category, phrases)| {
                let phrases = phrases.into_iter().map(|p| p.to_lowercase()).collect();
                (category, phrases)
            })
            .collect();
        Self { entries }
    }

    /// Iterate categories and their phrases in map order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(category, phrases)| (category.as_str(), phrases.as_slice()))
    }

    /// Phrases registered for a category
    pub fn phrases(&self, category: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, phrases)| phrases.as_slice())
    }

    /// Number of categories in the map
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no categories
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Immutable set of categories, templates and detection keywords
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
    keywords: KeywordMap,
    default_category: String,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    default_category: String,
    categories: Vec<CategoryDocument>,
    #[serde(default)]
    keywords: Vec<KeywordDocument>,
}

#[derive(Debug, Deserialize)]
struct CategoryDocument {
    name: String,
    #[serde(default)]
    templates: Vec<TemplateDocument>,
}

#[derive(Debug, Deserialize)]
struct TemplateDocument {
    body: String,
    #[serde(default)]
    placeholders: Option<Vec<String>>,
    confidence: f64,
}

#[derive(Debug, Deserialize)]
struct KeywordDocument {
    category: String,
    phrases: Vec<String>,
}

impl Catalog {
    /// Build a catalog, checking every structural invariant
    pub fn new(
        categories: Vec<Category>,
        keywords: KeywordMap,
        default_category: impl Into<String>,
    ) -> Result<Self> {
        let catalog = Self {
            categories,
            keywords,
            default_category: default_category.into(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(BUILTIN_CATALOG)
    }

    /// Parse a catalog from a YAML document
    ///
    /// Templates that omit `placeholders` get them derived from their body.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let document: CatalogDocument = serde_yaml::from_str(content)?;

        let categories = document
            .categories
            .into_iter()
            .map(|category| {
                let templates = category
                    .templates
                    .into_iter()
                    .map(|t| {
                        let placeholders = t
                            .placeholders
                            .unwrap_or_else(|| unique_placeholders(&t.body));
                        Template::new(t.body, placeholders, category.name.clone(), t.confidence)
                    })
                    .collect();
                Category::new(category.name, templates)
            })
            .collect();

        let keywords = KeywordMap::new(
            document
                .keywords
                .into_iter()
                .map(|k| (k.category, k.phrases))
                .collect(),
        );

        Self::new(categories, keywords, document.default_category)
    }

    /// Load a catalog from a YAML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_yaml_str(&content)?;
        debug!(
            "Loaded catalog with {} categories from {}",
            catalog.categories.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Categories in catalog order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category names in catalog order
    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    /// Templates of a category, if the category exists
    pub fn templates(&self, category: &str) -> Option<&[Template]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.templates.as_slice())
    }

    /// Keyword map used for detection
    pub fn keywords(&self) -> &KeywordMap {
        &self.keywords
    }

    /// Category returned when no keyword matches
    pub fn default_category(&self) -> &str {
        &self.default_category
    }

    /// Size summary
    pub fn stats(&self) -> CatalogStats {
        let total_categories = self.categories.len();
        let total_templates: usize = self.categories.iter().map(|c| c.templates.len()).sum();
        let categories_with_templates = self
            .categories
            .iter()
            .filter(|c| !c.templates.is_empty())
            .count();
        let average_templates_per_category = if total_categories == 0 {
            0
        } else {
            (total_templates as f64 / total_categories as f64).round() as usize
        };

        CatalogStats {
            total_categories,
            total_templates,
            categories_with_templates,
            average_templates_per_category,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(TemplateError::EmptyCatalog);
        }

        let mut names = HashSet::new();
        for category in &self.categories {
            if category.name.trim().is_empty() {
                return Err(TemplateError::InconsistentCatalog(
                    "Category name cannot be empty".to_string(),
                ));
            }
            if !names.insert(category.name.as_str()) {
                return Err(TemplateError::InconsistentCatalog(format!(
                    "Duplicate category: {}",
                    category.name
                )));
            }
            if category.templates.is_empty() {
                return Err(TemplateError::InconsistentCatalog(format!(
                    "Category '{}' has no templates",
                    category.name
                )));
            }
            for template in &category.templates {
                Self::validate_template(&category.name, template)?;
            }
        }

        let mut keyword_names = HashSet::new();
        for (category, phrases) in self.keywords.iter() {
            if !keyword_names.insert(category) {
                return Err(TemplateError::InconsistentCatalog(format!(
                    "Duplicate keyword entry: {}",
                    category
                )));
            }
            if !names.contains(category) {
                return Err(TemplateError::InconsistentCatalog(format!(
                    "Keywords reference unknown category: {}",
                    category
                )));
            }
            if phrases.iter().any(|p| p.trim().is_empty()) {
                return Err(TemplateError::InconsistentCatalog(format!(
                    "Category '{}' has an empty keyword",
                    category
                )));
            }
        }

        if let Some(missing) = self
            .categories
            .iter()
            .find(|c| !keyword_names.contains(c.name.as_str()))
        {
            return Err(TemplateError::InconsistentCatalog(format!(
                "Category '{}' has no keywords",
                missing.name
            )));
        }

        if !names.contains(self.default_category.as_str()) {
            return Err(TemplateError::InconsistentCatalog(format!(
                "Default category not in catalog: {}",
                self.default_category
            )));
        }

        Ok(())
    }

    fn validate_template(category: &str, template: &Template) -> Result<()> {
        if template.category != category {
            return Err(TemplateError::InconsistentCatalog(format!(
                "Template in '{}' is labelled '{}'",
                category, template.category
            )));
        }

        if !(template.confidence > 0.0 && template.confidence <= 1.0) {
            return Err(TemplateError::InconsistentCatalog(format!(
                "Confidence {} out of range in '{}'",
                template.confidence, category
            )));
        }

        let declared: HashSet<&str> = template.placeholders.iter().map(String::as_str).collect();
        let found = PlaceholderEngine::extract(&template.body);
        let found: HashSet<&str> = found.iter().map(String::as_str).collect();

        if declared != found {
            let mut orphans: Vec<&str> = declared.symmetric_difference(&found).copied().collect();
            orphans.sort_unstable();
            return Err(TemplateError::InconsistentCatalog(format!(
                "Placeholders do not match body in '{}': {}",
                category,
                orphans.join(", ")
            )));
        }

        Ok(())
    }
}

/// Placeholder names of a body, first occurrence only
fn unique_placeholders(body: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    PlaceholderEngine::extract(body)
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
