//! Common utilities shared across tool definitions.
//!
//! Argument parsing, result construction and fault isolation live here so
//! every tool reports failures the same way.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::domains::tools::{ToolContext, ToolError};

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Convert a handler outcome into a tool result.
pub fn into_result(outcome: Result<String, ToolError>) -> CallToolResult {
    match outcome {
        Ok(text) => success_result(text),
        Err(e) => error_result(&e.to_string()),
    }
}

/// Deserialize tool arguments into the tool's parameter struct.
pub fn parse_params<P: DeserializeOwned>(arguments: JsonObject) -> Result<P, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Map a dispatch error onto the MCP error space.
///
/// Only argument problems reach the protocol layer; everything else has
/// already been turned into an error result by [`run_isolated`].
pub fn to_mcp_error(err: ToolError) -> McpError {
    match err {
        ToolError::InvalidArguments(msg) => McpError::invalid_params(msg, None),
        ToolError::NotFound(name) => {
            McpError::invalid_params(format!("Unknown tool: {}", name), None)
        }
        other => McpError::internal_error(other.to_string(), None),
    }
}

/// Run a handler on its own OS thread and turn a panic into an error result.
///
/// A dedicated thread also keeps blocking `reqwest` out of the tokio runtime.
pub fn run_isolated<F>(tool: &'static str, handler: F) -> CallToolResult
where
    F: FnOnce() -> CallToolResult + Send + 'static,
{
    match std::thread::Builder::new()
        .name(format!("tool-{}", tool))
        .spawn(handler)
    {
        Ok(handle) => handle.join().unwrap_or_else(|_| {
            error!("Tool '{}' panicked", tool);
            let err = ToolError::internal(format!("tool '{}' failed unexpectedly", tool));
            error_result(&err.to_string())
        }),
        Err(e) => {
            error!("Failed to spawn thread for tool '{}': {}", tool, e);
            error_result(&ToolError::internal(e.to_string()).to_string())
        }
    }
}

/// Signature shared by every tool's dispatch entry point.
pub type ToolHandlerFn = fn(JsonObject, &ToolContext) -> Result<CallToolResult, ToolError>;

/// Create a ToolRoute for STDIO transport.
///
/// Arguments that do not match the tool's schema become an MCP
/// `invalid_params` error; anything after that is an ordinary tool result.
pub fn create_route<S>(tool: Tool, context: ToolContext, handler: ToolHandlerFn) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(tool, move |call: ToolCallContext<'_, S>| {
        let args = call.arguments.clone().unwrap_or_default();
        let context = context.clone();
        async move { handler(args, &context).map_err(to_mcp_error) }.boxed()
    })
}

/// Extract the first text block of a result (test helper).
#[cfg(test)]
pub fn first_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}
