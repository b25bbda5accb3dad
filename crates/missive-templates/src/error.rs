//! Error types for the template engine

use thiserror::Error;

/// Result type for template engine operations
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Errors that can occur while loading a catalog or customizing a template
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Catalog document could not be parsed
    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] serde_yaml::Error),

    /// IO error while reading a catalog file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog violates one of its structural invariants
    #[error("Inconsistent catalog: {0}")]
    InconsistentCatalog(String),

    /// Catalog has no categories at all
    #[error("Catalog must contain at least one category")]
    EmptyCatalog,

    /// Template text was missing or unusable
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
}
