//! Prompt combination tool definition.
//!
//! Concatenates the prompts of the requested categories into one document,
//! one header-prefixed block per prompt.

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
use crate::domains::catalog::{CatalogService, Category, DEFAULT_SEPARATOR};

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

/// Parameters for the prompt combination tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CombinePromptsParams {
    /// Categories to include, in order. Duplicates re-include the category;
    /// unknown entries are rejected at deserialization.
    #[schemars(description = "Ordered list of categories to combine")]
    pub categories: Vec<Category>,

    /// Separator placed between prompt blocks.
    #[schemars(description = "Separator between prompt blocks (default: \"\\n\\n---\\n\\n\")")]
    #[serde(default = "default_separator")]
    pub separator: String,
}

/// Combines the prompts of several categories into one text.
pub struct CombinePromptsTool;

impl CombinePromptsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "combine_prompts";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Concatenate all prompts of the given categories, in order, into a single document with headers per prompt.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(count = params.categories.len()))]
    pub fn execute(params: &CombinePromptsParams, catalog: &CatalogService) -> CallToolResult {
        info!("Combining prompts for {} categories", params.categories.len());

        match catalog
            .catalog()
            .combine(&params.categories, &params.separator)
        {
            Ok(combined) => json_result(&combined),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        catalog: Arc<CatalogService>,
    ) -> Result<serde_json::Value, String> {
        let categories = arguments
            .get("categories")
            .and_then(|v| v.as_array())
            .ok_or_else(|| "Missing or invalid 'categories' parameter".to_string())?
            .iter()
            .map(|v| {
                v.as_str()
                    .ok_or_else(|| "Category entries must be strings".to_string())?
                    .parse::<Category>()
                    .map_err(|e| e.to_string())
            })
            .collect::<Result<Vec<_>, String>>()?;

        let separator = arguments
            .get("separator")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .unwrap_or_else(default_separator);

        info!("Combine tool (HTTP) called for {} categories", categories.len());

        let params = CombinePromptsParams {
            categories,
            separator,
        };
        Ok(super::common::http_result(Self::execute(&params, &catalog)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CombinePromptsParams>(),
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
                let params: CombinePromptsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &catalog))
            }
            .boxed()
        })
    }
}
