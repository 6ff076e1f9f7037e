//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - [`ToolKind`], the closed set of tools and the only place a tool name is
//!   bound to its handler
//! - [`ToolRegistry`], tool metadata for listing, in-process dispatch and
//!   startup validation

use std::collections::HashSet;

use rmcp::{
    handler::server::tool::{ToolRoute, ToolRouter},
    model::{CallToolResult, JsonObject, Tool},
};
use tracing::{debug, warn};

use super::context::ToolContext;
use super::definitions::{
    ConvertUnitsTool, QrCodeTool, RollDiceTool, ShortenUrlTool, WebSearchTool,
};
use super::error::ToolError;
use super::router::build_tool_router;

// ============================================================================
// Tool Kind
// ============================================================================

/// Every tool this server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    WebSearch,
    RollDice,
    GenerateQrCode,
    ConvertUnits,
    ShortenUrl,
}

impl ToolKind {
    /// All tools, in listing order.
    pub const ALL: [ToolKind; 5] = [
        Self::WebSearch,
        Self::RollDice,
        Self::GenerateQrCode,
        Self::ConvertUnits,
        Self::ShortenUrl,
    ];

    /// Registered tool name.
    pub fn name(self) -> &'static str {
        match self {
            Self::WebSearch => WebSearchTool::NAME,
            Self::RollDice => RollDiceTool::NAME,
            Self::GenerateQrCode => QrCodeTool::NAME,
            Self::ConvertUnits => ConvertUnitsTool::NAME,
            Self::ShortenUrl => ShortenUrlTool::NAME,
        }
    }

    /// Look up a tool by its registered name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Tool metadata.
    pub fn to_tool(self) -> Tool {
        match self {
            Self::WebSearch => WebSearchTool::to_tool(),
            Self::RollDice => RollDiceTool::to_tool(),
            Self::GenerateQrCode => QrCodeTool::to_tool(),
            Self::ConvertUnits => ConvertUnitsTool::to_tool(),
            Self::ShortenUrl => ShortenUrlTool::to_tool(),
        }
    }

    /// rmcp route for STDIO transport.
    pub fn create_route<S>(self, context: ToolContext) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        match self {
            Self::WebSearch => WebSearchTool::create_route(context),
            Self::RollDice => RollDiceTool::create_route(context),
            Self::GenerateQrCode => QrCodeTool::create_route(context),
            Self::ConvertUnits => ConvertUnitsTool::create_route(context),
            Self::ShortenUrl => ShortenUrlTool::create_route(context),
        }
    }

    /// Run the tool with raw JSON arguments.
    pub fn handle(
        self,
        arguments: JsonObject,
        context: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        match self {
            Self::WebSearch => WebSearchTool::handle(arguments, context),
            Self::RollDice => RollDiceTool::handle(arguments, context),
            Self::GenerateQrCode => QrCodeTool::handle(arguments, context),
            Self::ConvertUnits => ConvertUnitsTool::handle(arguments, context),
            Self::ShortenUrl => ShortenUrlTool::handle(arguments, context),
        }
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching tool calls in-process
/// - Checking at startup that names and routes line up
pub struct ToolRegistry {
    context: ToolContext,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(context: ToolContext) -> Self {
        Self { context }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        ToolKind::ALL.iter().map(|kind| kind.name()).collect()
    }

    /// Dispatch a tool call to the appropriate handler.
    pub fn call_tool(&self, name: &str, arguments: JsonObject) -> Result<CallToolResult, ToolError> {
        match ToolKind::from_name(name) {
            Some(kind) => {
                debug!("Dispatching tool call: {}", name);
                kind.handle(arguments, &self.context)
            }
            None => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }

    /// Check that every tool has a unique, non-empty name and that the rmcp
    /// router exposes exactly the registered tools.
    pub fn validate(&self) -> Result<(), ToolError> {
        let mut seen = HashSet::new();
        for name in self.tool_names() {
            if name.trim().is_empty() {
                return Err(ToolError::internal("tool registered with an empty name"));
            }
            if !seen.insert(name) {
                return Err(ToolError::internal(format!("duplicate tool name: {}", name)));
            }
        }

        let router: ToolRouter<()> = build_tool_router(self.context.clone());
        let routed: HashSet<String> = router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.into_owned())
            .collect();
        let registered: HashSet<String> = seen.into_iter().map(str::to_string).collect();

        if routed != registered {
            let mut missing: Vec<_> = registered.symmetric_difference(&routed).cloned().collect();
            missing.sort();
            return Err(ToolError::internal(format!(
                "router and registry disagree on tools: {}",
                missing.join(", ")
            )));
        }

        debug!("Validated {} tools", registered.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::domains::tools::definitions::common::first_text;
    use std::sync::Arc;

    fn test_registry() -> ToolRegistry {
        ToolRegistry::new(ToolContext::new(Arc::new(Config::default())))
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_registry_tool_names() {
        let names = test_registry().tool_names();
        assert_eq!(
            names,
            vec!["web_search", "roll_dice", "generate_qr_code", "convert_units", "shorten_url"]
        );
    }

    #[test]
    fn test_from_name_round_trip() {
        for kind in ToolKind::ALL {
            assert_eq!(ToolKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.to_tool().name, kind.name());
        }
        assert_eq!(ToolKind::from_name("ROLL_DICE"), None);
    }

    #[test]
    fn test_all_tools_have_schemas() {
        for tool in ToolKind::ALL.map(ToolKind::to_tool) {
            assert!(tool.description.is_some());
            assert_eq!(
                tool.input_schema.get("type").and_then(|t| t.as_str()),
                Some("object")
            );
        }
    }

    #[test]
    fn test_validate() {
        assert!(test_registry().validate().is_ok());
    }

    #[test]
    fn test_registry_call_dice() {
        let result = test_registry()
            .call_tool("roll_dice", args(serde_json::json!({ "notation": "1d1+5" })))
            .unwrap();
        // 1d1 is rejected: dice need at least two sides.
        assert_eq!(result.is_error, Some(true));

        let result = test_registry()
            .call_tool("roll_dice", args(serde_json::json!({ "notation": "4d2" })))
            .unwrap();
        assert_ne!(result.is_error, Some(true));
        assert!(first_text(&result).starts_with("Rolling 4d2:"));
    }

    #[test]
    fn test_registry_call_unknown() {
        let result = test_registry().call_tool("unknown", JsonObject::new());
        assert!(matches!(result, Err(ToolError::NotFound(name)) if name == "unknown"));
    }

    #[test]
    fn test_registry_call_bad_arguments() {
        let result = test_registry().call_tool("convert_units", args(serde_json::json!({ "value": 1 })));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
