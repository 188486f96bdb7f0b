//! Single prompt fetch tool definition.

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

/// Parameters for the single prompt fetch tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPromptParams {
    /// The category the prompt belongs to.
    #[schemars(description = "Prompt category: 'react', 'fe', or 'common'")]
    pub category: Category,

    /// The prompt name, matched exactly (case-sensitive).
    #[schemars(description = "Prompt name within the category (exact match)")]
    pub name: String,
}

/// Fetches a single prompt body, verbatim.
pub struct GetPromptTool;

impl GetPromptTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_prompt";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get one prompt by category and name. Returns the body verbatim.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(category = %params.category, name = %params.name))]
    pub fn execute(params: &GetPromptParams, catalog: &CatalogService) -> CallToolResult {
        info!("Fetching prompt: {}/{}", params.category, params.name);

        match catalog.catalog().get(params.category, &params.name) {
            Ok(body) => json_result(&body),
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

        let name = arguments
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'name' parameter".to_string())?
            .to_string();

        info!("Prompt fetch tool (HTTP) called for: {}/{}", category, name);

        let params = GetPromptParams { category, name };
        Ok(super::common::http_result(Self::execute(&params, &catalog)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetPromptParams>(),
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
                let params: GetPromptParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &catalog))
            }
            .boxed()
        })
    }
}
