//! Tools domain module.
//!
//! Tools are executable functions that MCP clients call to perform a
//! specific action or computation.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - [`ToolKind`] enumeration, metadata and in-process dispatch
//! - `router.rs` - rmcp ToolRouter builder for STDIO transport
//! - `context.rs` - Shared state handed to every handler
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` exposing `NAME`, `to_tool()`,
//!    `handle()` and `create_route()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add a variant to [`ToolKind`] and extend its `match` arms
//!
//! The router and registry pick the new tool up from `ToolKind::ALL`.

mod context;
pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use context::ToolContext;
pub use error::ToolError;
pub use registry::{ToolKind, ToolRegistry};
pub use router::build_tool_router;
