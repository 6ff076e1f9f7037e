//! Tools backed by outbound HTTP calls.

pub mod search;
pub mod shorten_url;

pub use search::{WebSearchParams, WebSearchTool};
pub use shorten_url::{ShortenUrlParams, ShortenUrlTool};
