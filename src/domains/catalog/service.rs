//! Catalog service implementation.
//!
//! The CatalogService owns the process-wide PromptCatalog. The catalog is
//! built once from the embedded content registry; if that fails the service
//! keeps an empty catalog and every query degrades to CategoryNotFound
//! instead of propagating the fault.
//!
//! Besides handing out the catalog for the tool surface, the service
//! projects entries onto the native MCP prompts capability: each entry is
//! listed as `"{category}/{name}"` and served as a single user message.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use thiserror::Error;
use tracing::{error, info};

use super::catalog::PromptCatalog;
use super::error::CatalogError;
use super::registry::register_all;
use crate::core::config::CatalogConfig;

/// Errors from the MCP prompts projection.
#[derive(Debug, Error)]
pub enum PromptProjectionError {
    /// The composite prompt name is not of the form `category/name`.
    #[error("Invalid prompt name '{0}': expected 'category/name'")]
    InvalidName(String),

    /// The underlying catalog lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Service owning the prompt catalog.
pub struct CatalogService {
    /// Configuration for the catalog domain.
    #[allow(dead_code)]
    config: CatalogConfig,

    /// The immutable catalog; shared freely across concurrent requests.
    catalog: PromptCatalog,
}

impl CatalogService {
    /// Create the service, building the catalog from embedded content.
    pub fn new(config: CatalogConfig) -> Self {
        let catalog = match register_all() {
            Ok(catalog) => {
                info!("Catalog initialized with {} prompts", catalog.len());
                catalog
            }
            Err(e) => {
                error!("Catalog initialization failed, serving empty catalog: {}", e);
                PromptCatalog::empty()
            }
        };

        Self { config, catalog }
    }

    /// Create a service over a prepared catalog (used by tests).
    pub fn with_catalog(config: CatalogConfig, catalog: PromptCatalog) -> Self {
        Self { config, catalog }
    }

    /// The catalog itself; all five query operations live on it.
    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    /// List every catalog entry as an MCP prompt.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.catalog
            .iter()
            .map(|(category, entry)| Prompt {
                name: format!("{}/{}", category, entry.name),
                title: None,
                description: Some(format!("{} prompt from the '{}' category", entry.name, category)),
                arguments: None,
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Resolve a composite `category/name` prompt.
    pub async fn get_prompt(&self, name: &str) -> Result<GetPromptResult, PromptProjectionError> {
        let (category, prompt_name) = name
            .split_once('/')
            .ok_or_else(|| PromptProjectionError::InvalidName(name.to_string()))?;

        let category = category
            .parse()
            .map_err(|_| PromptProjectionError::InvalidName(name.to_string()))?;

        let body = self.catalog.get(category, prompt_name)?;

        Ok(GetPromptResult {
            description: Some(format!("{} prompt from the '{}' category", prompt_name, category)),
            messages: vec![PromptMessage::new_text(
                PromptMessageRole::User,
                body.content,
            )],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::category::Category;

    #[tokio::test]
    async fn test_service_builds_embedded_catalog() {
        let service = CatalogService::new(CatalogConfig::default());
        assert!(!service.catalog().is_empty());

        let prompts = service.list_prompts().await;
        assert_eq!(prompts.len(), service.catalog().len());
        assert!(prompts.iter().any(|p| p.name == "react/component-creation"));
    }

    #[tokio::test]
    async fn test_get_prompt_by_composite_name() {
        let service = CatalogService::new(CatalogConfig::default());

        let result = service.get_prompt("common/code-review").await.unwrap();
        assert_eq!(result.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_get_prompt_malformed_name() {
        let service = CatalogService::new(CatalogConfig::default());

        let err = service.get_prompt("code-review").await.unwrap_err();
        assert!(matches!(err, PromptProjectionError::InvalidName(_)));

        let err = service.get_prompt("backend/code-review").await.unwrap_err();
        assert!(matches!(err, PromptProjectionError::InvalidName(_)));
    }

    #[tokio::test]
    async fn test_get_prompt_unknown_entry() {
        let service = CatalogService::new(CatalogConfig::default());

        let err = service.get_prompt("react/no-such-prompt").await.unwrap_err();
        assert!(matches!(
            err,
            PromptProjectionError::Catalog(CatalogError::PromptNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_catalog_fallback_shape() {
        let service =
            CatalogService::with_catalog(CatalogConfig::default(), PromptCatalog::empty());

        assert!(service.list_prompts().await.is_empty());
        let err = service.get_prompt("react/component-creation").await.unwrap_err();
        assert!(matches!(
            err,
            PromptProjectionError::Catalog(CatalogError::CategoryNotFound(Category::React))
        ));
    }
}
