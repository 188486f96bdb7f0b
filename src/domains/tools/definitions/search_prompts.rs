//! Keyword search tool definition.
//!
//! Case-insensitive substring search over prompt names and bodies, ranked
//! by a relevance heuristic.

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

/// Parameters for the keyword search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchPromptsParams {
    /// The keyword to search for (case-insensitive substring).
    #[schemars(description = "Keyword to search for in prompt names and bodies")]
    pub keyword: String,

    /// Categories to restrict the search to; all categories when omitted.
    #[schemars(description = "Optional list of categories to search within")]
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
}

/// Searches prompt names and bodies for a keyword.
pub struct SearchPromptsTool;

impl SearchPromptsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_prompts";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search prompts by keyword (case-insensitive) across names and bodies. Returns matches ranked by relevance with a snippet each.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(keyword = %params.keyword))]
    pub fn execute(params: &SearchPromptsParams, catalog: &CatalogService) -> CallToolResult {
        if params.keyword.is_empty() {
            return error_result("Search keyword must not be empty");
        }

        info!("Searching prompts for keyword: {}", params.keyword);

        let results = catalog
            .catalog()
            .search(&params.keyword, params.categories.as_deref());
        json_result(&results)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        catalog: Arc<CatalogService>,
    ) -> Result<serde_json::Value, String> {
        let keyword = arguments
            .get("keyword")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'keyword' parameter".to_string())?
            .to_string();

        let categories = match arguments.get("categories") {
            None | Some(serde_json::Value::Null) => None,
            Some(value) => {
                let entries = value
                    .as_array()
                    .ok_or_else(|| "'categories' must be a list".to_string())?
                    .iter()
                    .map(|v| {
                        v.as_str()
                            .ok_or_else(|| "Category entries must be strings".to_string())?
                            .parse::<Category>()
                            .map_err(|e| e.to_string())
                    })
                    .collect::<Result<Vec<_>, String>>()?;
                Some(entries)
            }
        };

        info!("Search tool (HTTP) called for keyword: {}", keyword);

        let params = SearchPromptsParams {
            keyword,
            categories,
        };
        Ok(super::common::http_result(Self::execute(&params, &catalog)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchPromptsParams>(),
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
                let params: SearchPromptsParams =
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
    use crate::domains::catalog::CatalogBuilder;

    fn service() -> CatalogService {
        CatalogService::new(CatalogConfig::default())
    }

    #[test]
    fn test_search_returns_ranked_matches() {
        let result = SearchPromptsTool::execute(
            &SearchPromptsParams {
                keyword: "component".to_string(),
                categories: None,
            },
            &service(),
        );
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let payload: serde_json::Value = serde_json::from_str(result_text(&result)).unwrap();
        let results = payload["results"].as_array().unwrap();
        assert_eq!(payload["total_found"], results.len());
        assert!(!results.is_empty());

        // The name hit ranks first.
        assert_eq!(results[0]["name"], "component-creation");
        let scores: Vec<u64> = results
            .iter()
            .map(|r| r["relevance"].as_u64().unwrap())
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_search_zero_matches_is_success() {
        let result = SearchPromptsTool::execute(
            &SearchPromptsParams {
                keyword: "kubernetes".to_string(),
                categories: None,
            },
            &service(),
        );
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let payload: serde_json::Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(payload["total_found"], 0);
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let result = SearchPromptsTool::execute(
            &SearchPromptsParams {
                keyword: String::new(),
                categories: None,
            },
            &service(),
        );
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("must not be empty"));
    }

    #[test]
    fn test_snippet_is_truncated_with_ellipsis() {
        let long_body = format!("performance {}", "x".repeat(300));
        let catalog = CatalogBuilder::new()
            .prompt(Category::Fe, "long-prompt", long_body.leak())
            .build()
            .unwrap();
        let service = CatalogService::with_catalog(CatalogConfig::default(), catalog);

        let result = SearchPromptsTool::execute(
            &SearchPromptsParams {
                keyword: "performance".to_string(),
                categories: Some(vec![Category::Fe]),
            },
            &service,
        );

        let payload: serde_json::Value = serde_json::from_str(result_text(&result)).unwrap();
        let snippet = payload["results"][0]["snippet"].as_str().unwrap();
        assert_eq!(snippet.chars().count(), 203);
        assert!(snippet.ends_with("..."));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_optional_categories() {
        let catalog = Arc::new(service());

        let result = SearchPromptsTool::http_handler(
            serde_json::json!({ "keyword": "hooks" }),
            catalog.clone(),
        )
        .unwrap();
        assert_eq!(result["isError"], false);

        let result = SearchPromptsTool::http_handler(
            serde_json::json!({ "keyword": "hooks", "categories": ["common"] }),
            catalog,
        )
        .unwrap();
        assert_eq!(result["isError"], false);
    }
}
