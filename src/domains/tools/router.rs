//! Tool Router - builds the rmcp ToolRouter from the tool enumeration.
//!
//! Each tool knows how to create its own route; this module only walks
//! [`ToolKind::ALL`].

use rmcp::handler::server::tool::ToolRouter;

use super::context::ToolContext;
use super::registry::ToolKind;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(context: ToolContext) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolKind::ALL
        .into_iter()
        .fold(ToolRouter::new(), |router, kind| {
            router.with_route(kind.create_route(context.clone()))
        })
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::Config;
    use std::sync::Arc;

    struct TestServer {}

    fn test_context() -> ToolContext {
        ToolContext::new(Arc::new(Config::default()))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_context());
        let tools = router.list_all();
        assert_eq!(tools.len(), 5);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"web_search"));
        assert!(names.contains(&"roll_dice"));
        assert!(names.contains(&"generate_qr_code"));
        assert!(names.contains(&"convert_units"));
        assert!(names.contains(&"shorten_url"));
    }

    #[test]
    fn test_registry_matches_router() {
        let context = test_context();
        let registry = ToolRegistry::new(context.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(context);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
