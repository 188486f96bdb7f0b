//! Category listing tool definition - all prompts of one category.

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

use super::common::{error_result, json_result};
use crate::domains::catalog::{CatalogService, Category};

/// Parameters for the per-category listing tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPromptsByCategoryParams {
    /// The category to list. One of: react, fe, common.
    #[schemars(description = "Prompt category: 'react', 'fe', or 'common'")]
    pub category: Category,
}

/// Lists every prompt registered under one category.
pub struct GetPromptsByCategoryTool;

impl GetPromptsByCategoryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_prompts_by_category";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List all prompts in a category with their full contents, in registration order.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(category = %params.category))]
    pub fn execute(params: &GetPromptsByCategoryParams, catalog: &CatalogService) -> CallToolResult {
        info!("Listing prompts for category: {}", params.category);

        match catalog.catalog().list_by_category(params.category) {
            Ok(listing) => json_result(&listing),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        catalog: Arc<CatalogService>,
    ) -> Result<serde_json::Value, String> {
        let category = arguments
            .get("category")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'category' parameter".to_string())?
            .parse::<Category>()
            .map_err(|e| e.to_string())?;

        info!("Per-category listing tool (HTTP) called for: {}", category);

        let params = GetPromptsByCategoryParams { category };
        Ok(super::common::http_result(Self::execute(&params, &catalog)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetPromptsByCategoryParams>(),
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
                let params: GetPromptsByCategoryParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &catalog))
            }
            .boxed()
        })
    }
}
