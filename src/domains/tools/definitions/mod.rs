//! Tool definitions module.
//!
//! Each tool is defined in its own file and exposes the same surface:
//! `NAME`, `DESCRIPTION`, a parameter struct, `execute()`, `handle()`,
//! `to_tool()` and `create_route()`.

pub mod common;
pub mod utility;
pub mod web;

pub use utility::{
    ConvertUnitsParams, ConvertUnitsTool, QrCodeParams, QrCodeTool, RollDiceParams, RollDiceTool,
};
pub use web::{ShortenUrlParams, ShortenUrlTool, WebSearchParams, WebSearchTool};
