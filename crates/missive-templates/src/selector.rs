//! Template selection within a category

use crate::catalog::Catalog;
use crate::models::Template;

/// Maximum number of alternatives returned alongside a selection
pub const MAX_ALTERNATIVES: usize = 3;

/// Chooses templates from a catalog
#[derive(Debug, Clone, Copy)]
pub struct TemplateSelector<'a> {
    catalog: &'a Catalog,
}

impl<'a> TemplateSelector<'a> {
    /// Create a selector over a catalog
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Highest-confidence template of a category; the first one wins ties
    pub fn select(&self, category: &str) -> Option<&'a Template> {
        let templates = self.catalog.templates(category)?;
        let mut iter = templates.iter();
        let first = iter.next()?;

        Some(iter.fold(first, |best, current| {
            if current.confidence > best.confidence {
                current
            } else {
                best
            }
        }))
    }

    /// Up to three bodies from the category, excluding `selected`
    ///
    /// Exclusion is by identity, so a different entry with the same body text
    /// is still offered.
    pub fn alternatives(&self, category: &str, selected: &Template) -> Vec<String> {
        self.catalog
            .templates(category)
            .unwrap_or_default()
            .iter()
            .filter(|template| !std::ptr::eq(*template, selected))
            .map(|template| template.body.clone())
            .take(MAX_ALTERNATIVES)
            .collect()
    }
}
