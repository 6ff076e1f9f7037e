//! Outbound HTTP collaborators.
//!
//! Both clients use blocking `reqwest` with a bounded timeout and never
//! retry; failures surface immediately as [`WebError`].

mod error;
pub mod search;
pub mod shortener;

pub use error::WebError;
pub use search::{SearchProvider, SearchSource, TavilyClient, render_context};
pub use shortener::{ShortenService, ShortenerClient, UrlShortener};
