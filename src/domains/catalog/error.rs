//! Catalog-specific error types.

use thiserror::Error;

use super::category::Category;

/// Errors that can occur during catalog queries.
///
/// All variants are recoverable and local to a single query; they are
/// surfaced to callers as structured results, never as a crash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The requested category is not registered in the catalog.
    #[error("Category not found: {0}")]
    CategoryNotFound(Category),

    /// The requested prompt name does not exist within a valid category.
    #[error("Prompt not found: {name} (category: {category})")]
    PromptNotFound { category: Category, name: String },

    /// A combine or search legitimately produced zero results.
    #[error("No prompts found for the requested categories")]
    NoMatches,

    /// The embedded content failed to load at startup.
    #[error("Catalog initialization failed: {0}")]
    Initialization(String),
}

impl CatalogError {
    /// Create a new "prompt not found" error.
    pub fn prompt_not_found(category: Category, name: impl Into<String>) -> Self {
        Self::PromptNotFound {
            category,
            name: name.into(),
        }
    }

    /// Create a new initialization error.
    pub fn initialization(msg: impl Into<String>) -> Self {
        Self::Initialization(msg.into())
    }
}
