//! Toolbox MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing a small set of
//! general-purpose tools: web search, dice rolling, QR code generation,
//! unit conversion and URL shortening.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and stdio transport
//! - **domains**: business logic organized by bounded contexts
//!   - **dice**: dice notation evaluator
//!   - **units**: temperature table and unit registry
//!   - **web**: Tavily search and URL shortener clients
//!   - **tools**: tool definitions, registry and router
//!
//! # Example
//!
//! ```rust,no_run
//! use toolbox_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
