//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the tools domain.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and enumerated by `ToolKind`. The ToolRouter is built from that
//! enumeration in `domains/tools/router.rs`, so adding a tool does not touch
//! this file.

use rmcp::{
    ErrorData as McpError, ServerHandler, handler::server::tool::ToolRouter, model::*,
    tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Error;
use crate::domains::tools::definitions::common::to_mcp_error;
use crate::domains::tools::{ToolContext, ToolRegistry, build_tool_router};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. All state is
/// built once in [`McpServer::new`] and shared read-only between requests.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// In-process dispatch and tool metadata.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails when the tool registry does not validate.
    pub fn new(config: Config) -> Result<Self, Error> {
        let config = Arc::new(config);
        let context = ToolContext::new(config.clone());

        let registry = ToolRegistry::new(context.clone());
        registry.validate()?;
        info!("Registered tools: {}", registry.tool_names().join(", "));

        Ok(Self {
            tool_router: build_tool_router::<Self>(context),
            registry: Arc::new(registry),
            config,
        })
    }

    // ========================================================================
    // In-process Access
    // ========================================================================

    /// List all available tools.
    pub fn tool_descriptors(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Call a tool by name without going through a transport.
    ///
    /// Unknown tools and malformed arguments are MCP errors; every other
    /// failure is an error result.
    #[instrument(skip(self, arguments))]
    pub async fn dispatch_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, McpError> {
        self.registry
            .call_tool(name, arguments)
            .map_err(to_mcp_error)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "General-purpose toolbox: web search, dice rolling, QR code generation, \
                 unit conversion and URL shortening."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}
