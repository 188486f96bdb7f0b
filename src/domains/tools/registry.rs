//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use super::definitions::{
    CombinePromptsTool, GetCategoriesTool, GetPromptTool, GetPromptsByCategoryTool,
    SearchPromptsTool,
};
use crate::domains::catalog::CatalogService;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    catalog: Arc<CatalogService>,
}

impl ToolRegistry {
    /// Create a new tool registry over the shared catalog.
    pub fn new(catalog: Arc<CatalogService>) -> Self {
        Self { catalog }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetCategoriesTool::NAME,
            GetPromptsByCategoryTool::NAME,
            GetPromptTool::NAME,
            CombinePromptsTool::NAME,
            SearchPromptsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetCategoriesTool::to_tool(),
            GetPromptsByCategoryTool::to_tool(),
            GetPromptTool::to_tool(),
            CombinePromptsTool::to_tool(),
            SearchPromptsTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            GetCategoriesTool::NAME => {
                GetCategoriesTool::http_handler(arguments, self.catalog.clone())
            }
            GetPromptsByCategoryTool::NAME => {
                GetPromptsByCategoryTool::http_handler(arguments, self.catalog.clone())
            }
            GetPromptTool::NAME => GetPromptTool::http_handler(arguments, self.catalog.clone()),
            CombinePromptsTool::NAME => {
                CombinePromptsTool::http_handler(arguments, self.catalog.clone())
            }
            SearchPromptsTool::NAME => {
                SearchPromptsTool::http_handler(arguments, self.catalog.clone())
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(format!("Unknown tool: {}", name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CatalogConfig;

    fn test_catalog() -> Arc<CatalogService> {
        Arc::new(CatalogService::new(CatalogConfig::default()))
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_catalog());
        let names = registry.tool_names();
        assert_eq!(names.len(), 5);
        assert!(names.contains(&"get_categories"));
        assert!(names.contains(&"get_prompts_by_category"));
        assert!(names.contains(&"get_prompt"));
        assert!(names.contains(&"combine_prompts"));
        assert!(names.contains(&"search_prompts"));
    }

    #[test]
    fn test_metadata_matches_names() {
        let registry = ToolRegistry::new(test_catalog());
        let tools = ToolRegistry::get_all_tools();
        let names = registry.tool_names();
        assert_eq!(tools.len(), names.len());
        for tool in tools {
            assert!(names.contains(&tool.name.as_ref()));
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_get_categories() {
        let registry = ToolRegistry::new(test_catalog());
        let result = registry.call_tool("get_categories", serde_json::json!({}));
        assert!(result.is_ok());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_catalog());
        let result = registry.call_tool("unknown", serde_json::json!({}));
        assert!(result.is_err());
    }
}
