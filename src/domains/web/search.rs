//! Web search collaborator (Tavily).
//!
//! Results are condensed into a "search context": a JSON array of
//! `{url, content}` sources sized for an LLM prompt.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::WebError;
use crate::core::config::SearchConfig;

const SERVICE: &str = "Tavily";

/// One source in a search context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSource {
    pub url: String,
    pub content: String,
}

/// Something that can search the web.
pub trait SearchProvider {
    /// Return the sources found for `query`, best first.
    fn search(&self, query: &str) -> Result<Vec<SearchSource>, WebError>;
}

/// Blocking Tavily API client.
pub struct TavilyClient {
    client: Client,
    api_key: String,
    base_url: String,
    max_results: u32,
    search_depth: String,
}

#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    query: &'a str,
    search_depth: &'a str,
    max_results: u32,
    topic: &'static str,
    include_answer: bool,
    include_raw_content: bool,
    include_images: bool,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    url: String,
    #[serde(default)]
    content: String,
}

impl TavilyClient {
    /// Build a client from the search configuration.
    pub fn new(api_key: &str, config: &SearchConfig) -> Result<Self, WebError> {
        if api_key.trim().is_empty() {
            return Err(WebError::NotConfigured("Tavily API key"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_results: config.max_results,
            search_depth: config.search_depth.clone(),
        })
    }
}

impl SearchProvider for TavilyClient {
    fn search(&self, query: &str) -> Result<Vec<SearchSource>, WebError> {
        let url = format!("{}/search", self.base_url);
        info!("Searching {} for: {}", SERVICE, query);

        let body = TavilyRequest {
            query,
            search_depth: &self.search_depth,
            max_results: self.max_results,
            topic: "general",
            include_answer: false,
            include_raw_content: false,
            include_images: false,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebError::Status {
                service: SERVICE,
                status: status.as_u16(),
            });
        }

        let parsed: TavilyResponse = response
            .json()
            .map_err(|e| WebError::parse(SERVICE, e.to_string()))?;

        debug!("{} returned {} results", SERVICE, parsed.results.len());

        Ok(parsed
            .results
            .into_iter()
            .map(|r| SearchSource {
                url: r.url,
                content: r.content,
            })
            .collect())
    }
}

/// Render sources as a JSON array, keeping whole sources until the
/// serialized context would exceed `max_chars` characters (not bytes).
///
/// The first source is always kept so a single long page still yields
/// some context.
pub fn render_context(sources: &[SearchSource], max_chars: usize) -> Result<String, WebError> {
    let mut kept: Vec<&SearchSource> = Vec::with_capacity(sources.len());
    let mut used = 2; // "[]"

    for source in sources {
        let len = serde_json::to_string(source)
            .map_err(|e| WebError::parse(SERVICE, e.to_string()))?
            .chars()
            .count();
        let separator = usize::from(!kept.is_empty());
        if !kept.is_empty() && used + separator + len > max_chars {
            break;
        }
        used += separator + len;
        kept.push(source);
    }

    serde_json::to_string(&kept).map_err(|e| WebError::parse(SERVICE, e.to_string()))
}
