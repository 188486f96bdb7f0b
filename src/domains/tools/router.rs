//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own
//! route over the shared catalog service.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    CombinePromptsTool, GetCategoriesTool, GetPromptTool, GetPromptsByCategoryTool,
    SearchPromptsTool,
};
use crate::domains::catalog::CatalogService;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(catalog: Arc<CatalogService>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetCategoriesTool::create_route(catalog.clone()))
        .with_route(GetPromptsByCategoryTool::create_route(catalog.clone()))
        .with_route(GetPromptTool::create_route(catalog.clone()))
        .with_route(CombinePromptsTool::create_route(catalog.clone()))
        .with_route(SearchPromptsTool::create_route(catalog))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::CatalogConfig;

    struct TestServer {}

    fn test_catalog() -> Arc<CatalogService> {
        Arc::new(CatalogService::new(CatalogConfig::default()))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_catalog());
        let tools = router.list_all();
        assert_eq!(tools.len(), 5);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_categories"));
        assert!(names.contains(&"get_prompts_by_category"));
        assert!(names.contains(&"get_prompt"));
        assert!(names.contains(&"combine_prompts"));
        assert!(names.contains(&"search_prompts"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router expose the same tools
        let catalog = test_catalog();
        let registry = ToolRegistry::new(catalog.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(catalog);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
