//! Category listing tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::json_result;
use crate::domains::catalog::CatalogService;

/// Parameters for the category listing tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetCategoriesParams {}

/// Lists the categories registered in the catalog.
pub struct GetCategoriesTool;

impl GetCategoriesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_categories";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List all available prompt categories in registration order.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all)]
    pub fn execute(_params: &GetCategoriesParams, catalog: &CatalogService) -> CallToolResult {
        info!("Listing catalog categories");

        // Cannot fail; an uninitialized catalog yields an empty list.
        let result = catalog.catalog().categories();
        json_result(&result)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        _arguments: serde_json::Value,
        catalog: Arc<CatalogService>,
    ) -> Result<serde_json::Value, String> {
        info!("Category listing tool (HTTP) called");

        let result = Self::execute(&GetCategoriesParams::default(), &catalog);
        Ok(super::common::http_result(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetCategoriesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(catalog: Arc<CatalogService>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let catalog = catalog.clone();
            async move {
                let params: GetCategoriesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &catalog))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::test_support::result_text;
    use super::*;
    use crate::core::config::CatalogConfig;
    use crate::domains::catalog::PromptCatalog;

    #[test]
    fn test_lists_embedded_categories() {
        let catalog = CatalogService::new(CatalogConfig::default());
        let result = GetCategoriesTool::execute(&GetCategoriesParams::default(), &catalog);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let payload: serde_json::Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(payload["categories"], serde_json::json!(["react", "fe", "common"]));
        assert_eq!(payload["total"], 3);
    }

    #[test]
    fn test_empty_catalog_yields_empty_list() {
        let catalog =
            CatalogService::with_catalog(CatalogConfig::default(), PromptCatalog::empty());
        let result = GetCategoriesTool::execute(&GetCategoriesParams::default(), &catalog);

        let payload: serde_json::Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(payload["total"], 0);
    }
}
