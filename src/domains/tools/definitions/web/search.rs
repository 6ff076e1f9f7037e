//! Web search tool definition.
//!
//! Queries Tavily and returns a compact search context: a JSON array of
//! `{url, content}` sources suitable for grounding an answer.

use rmcp::{
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::{self, into_result, parse_params, run_isolated};
use crate::domains::tools::{ToolContext, ToolError};
use crate::domains::web::{SearchProvider, TavilyClient, render_context};

const ACTION: &str = "searching the web";

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the web search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WebSearchParams {
    /// Free-text search query.
    #[schemars(description = "What to search the web for")]
    pub query: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Web search tool backed by Tavily.
pub struct WebSearchTool;

impl WebSearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "web_search";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search the web for information about the given query. \
         Returns a JSON array of sources, each with its url and the relevant page content.";

    /// Execute the search against `provider`.
    #[instrument(skip_all, fields(query = %params.query))]
    pub fn execute(
        params: &WebSearchParams,
        provider: &dyn SearchProvider,
        max_context_chars: usize,
    ) -> CallToolResult {
        into_result(Self::search(params, provider, max_context_chars))
    }

    fn search(
        params: &WebSearchParams,
        provider: &dyn SearchProvider,
        max_context_chars: usize,
    ) -> Result<String, ToolError> {
        let query = params.query.trim();
        if query.is_empty() {
            return Err(ToolError::invalid_arguments("query must not be empty"));
        }

        let sources = provider
            .search(query)
            .map_err(|e| ToolError::from_web(ACTION, e))?;
        info!("Search returned {} sources", sources.len());

        if sources.is_empty() {
            return Ok(format!("No results found for: {}", query));
        }

        render_context(&sources, max_context_chars).map_err(|e| ToolError::from_web(ACTION, e))
    }

    /// Dispatch entry point. The blocking client is built on the worker
    /// thread.
    pub fn handle(arguments: JsonObject, context: &ToolContext) -> Result<CallToolResult, ToolError> {
        let params: WebSearchParams = parse_params(arguments)?;
        let config = context.config.clone();

        Ok(run_isolated(Self::NAME, move || {
            match TavilyClient::new(config.tavily_api_key(), &config.search) {
                Ok(client) => Self::execute(&params, &client, config.search.max_context_chars),
                Err(e) => into_result(Err(ToolError::from_web(ACTION, e))),
            }
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WebSearchParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(context: ToolContext) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::create_route(Self::to_tool(), context, Self::handle)
    }
}

// ============================================================================
// Tests
// ============================================================================
