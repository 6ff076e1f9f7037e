//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (optionally via a `.env` file) on top of defaults.
//! Configuration is read once at startup and shared read-only afterwards.

use super::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::info;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,

    /// Web search collaborator settings.
    pub search: SearchConfig,

    /// URL shortening collaborator settings.
    pub shortener: ShortenerConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl LoggingConfig {
    /// Load `MCP_LOG_LEVEL` and `MCP_LOG_TIMESTAMPS` (after `.env`).
    ///
    /// Kept separate from [`Config::from_env`] so the subscriber can be
    /// installed before the rest of the configuration is validated.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut logging = Self::default();
        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }
        if let Some(enabled) = env_parse("MCP_LOG_TIMESTAMPS")? {
            logging.with_timestamps = enabled;
        }
        Ok(logging)
    }
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Tavily API key for web search.
    /// Get a key at: https://app.tavily.com
    pub tavily_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "tavily_api_key",
                &self.tavily_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Web search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base URL of the Tavily API.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Number of results requested per search.
    pub max_results: u32,

    /// Tavily search depth ("basic" or "advanced").
    pub search_depth: String,

    /// Upper bound on the size of the returned search context.
    pub max_context_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.tavily.com".to_string(),
            timeout_secs: 30,
            max_results: 5,
            search_depth: "basic".to_string(),
            max_context_chars: 16_000,
        }
    }
}

/// URL shortener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenerConfig {
    /// Base URL of the TinyURL API.
    pub tinyurl_base_url: String,

    /// Base URL of the is.gd API.
    pub isgd_base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            tinyurl_base_url: "https://tinyurl.com".to_string(),
            isgd_base_url: "https://is.gd".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "toolbox-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
            credentials: CredentialsConfig::default(),
            search: SearchConfig::default(),
            shortener: ShortenerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server variables are prefixed with `MCP_`, for example
    /// `MCP_SERVER_NAME` or `MCP_LOG_LEVEL`. The Tavily key is read from
    /// `MCP_TAVILY_API_KEY` or `TAVILY_API_KEY` and is required.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env()?;

        let api_key = std::env::var("MCP_TAVILY_API_KEY")
            .or_else(|_| std::env::var("TAVILY_API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                Error::config(
                    "TAVILY_API_KEY is not set. The web_search tool needs a Tavily API key \
                     (get one at https://app.tavily.com)",
                )
            })?;
        config.credentials.tavily_api_key = Some(api_key);
        info!("Tavily API key loaded from environment");

        if let Ok(url) = std::env::var("MCP_TAVILY_BASE_URL") {
            config.search.base_url = url;
        }
        if let Some(secs) = env_parse("MCP_SEARCH_TIMEOUT_SECS")? {
            config.search.timeout_secs = positive("MCP_SEARCH_TIMEOUT_SECS", secs)?;
        }
        if let Some(n) = env_parse("MCP_SEARCH_MAX_RESULTS")? {
            config.search.max_results = positive("MCP_SEARCH_MAX_RESULTS", n)?;
        }
        if let Ok(depth) = std::env::var("MCP_SEARCH_DEPTH") {
            config.search.search_depth = depth;
        }
        if let Some(n) = env_parse("MCP_SEARCH_MAX_CONTEXT_CHARS")? {
            config.search.max_context_chars = positive("MCP_SEARCH_MAX_CONTEXT_CHARS", n)?;
        }

        if let Ok(url) = std::env::var("MCP_TINYURL_BASE_URL") {
            config.shortener.tinyurl_base_url = url;
        }
        if let Ok(url) = std::env::var("MCP_ISGD_BASE_URL") {
            config.shortener.isgd_base_url = url;
        }
        if let Some(secs) = env_parse("MCP_SHORTENER_TIMEOUT_SECS")? {
            config.shortener.timeout_secs = positive("MCP_SHORTENER_TIMEOUT_SECS", secs)?;
        }

        Ok(config)
    }

    /// The Tavily API key, or an empty string when unset.
    pub fn tavily_api_key(&self) -> &str {
        self.credentials.tavily_api_key.as_deref().unwrap_or_default()
    }
}

/// Read and parse an optional environment variable.
fn env_parse<T: FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::config(format!("{} has an invalid value: '{}'", name, raw))),
        Err(_) => Ok(None),
    }
}

fn positive<T: PartialOrd + Default>(name: &str, value: T) -> Result<T> {
    if value > T::default() {
        Ok(value)
    } else {
        Err(Error::config(format!("{} must be greater than zero", name)))
    }
}
