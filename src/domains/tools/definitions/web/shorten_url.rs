//! URL shortening tool definition.

use reqwest::Url;
use rmcp::{
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::instrument;

use crate::domains::tools::definitions::common::{self, into_result, parse_params, run_isolated};
use crate::domains::tools::{ToolContext, ToolError};
use crate::domains::web::{ShortenService, ShortenerClient, UrlShortener, WebError};

const ACTION: &str = "shortening URL";

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the URL shortening tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ShortenUrlParams {
    #[schemars(description = "The http(s) URL to shorten")]
    pub url: String,

    #[serde(default = "default_service")]
    #[schemars(description = "Shortening service: 'tinyurl' (default) or 'is.gd'")]
    pub service: String,
}

fn default_service() -> String {
    ShortenService::TinyUrl.as_str().to_string()
}

// ============================================================================
// Tool Definition
// ============================================================================

/// URL shortening tool.
pub struct ShortenUrlTool;

impl ShortenUrlTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "shorten_url";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Shorten a URL using a public URL shortening service (tinyurl or is.gd).";

    /// Execute the tool logic with the given shortener.
    #[instrument(skip_all, fields(service = %params.service))]
    pub fn execute(params: &ShortenUrlParams, shortener: &dyn UrlShortener) -> CallToolResult {
        into_result(Self::shorten(params, shortener))
    }

    fn shorten(params: &ShortenUrlParams, shortener: &dyn UrlShortener) -> Result<String, ToolError> {
        let service: ShortenService = params
            .service
            .parse()
            .map_err(|e| ToolError::from_web(ACTION, e))?;
        let url = validate_url(&params.url).map_err(|e| ToolError::from_web(ACTION, e))?;

        let shortened = shortener
            .shorten(url, service)
            .map_err(|e| ToolError::from_web(ACTION, e))?;

        Ok(format!("Original URL: {}\nShortened URL: {}", url, shortened))
    }

    /// Dispatch entry point. The blocking client is built on the worker
    /// thread.
    pub fn handle(arguments: JsonObject, context: &ToolContext) -> Result<CallToolResult, ToolError> {
        let params: ShortenUrlParams = parse_params(arguments)?;
        let config = context.config.clone();

        Ok(run_isolated(Self::NAME, move || {
            match ShortenerClient::new(&config.shortener) {
                Ok(client) => Self::execute(&params, &client),
                Err(e) => into_result(Err(ToolError::from_web(ACTION, e))),
            }
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ShortenUrlParams>(),
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
// Helper Functions
// ============================================================================

/// Trim `raw` and check that it is an absolute http(s) URL.
fn validate_url(raw: &str) -> Result<&str, WebError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(WebError::invalid_input("url must not be empty"));
    }

    let parsed = Url::parse(trimmed)
        .map_err(|e| WebError::invalid_input(format!("'{}' is not a valid URL: {}", trimmed, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed),
        scheme => Err(WebError::invalid_input(format!(
            "unsupported URL scheme '{}' (expected http or https)",
            scheme
        ))),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::domains::tools::definitions::common::first_text;
    use std::sync::Arc;

    /// Fails the test if any network call is attempted.
    struct NoNetwork;

    impl UrlShortener for NoNetwork {
        fn shorten(&self, _url: &str, _service: ShortenService) -> Result<String, WebError> {
            panic!("shortener must not be called");
        }
    }

    struct FixedShortener;

    impl UrlShortener for FixedShortener {
        fn shorten(&self, _url: &str, service: ShortenService) -> Result<String, WebError> {
            Ok(format!("https://{}/abc", service))
        }
    }

    fn params(url: &str, service: &str) -> ShortenUrlParams {
        ShortenUrlParams {
            url: url.to_string(),
            service: service.to_string(),
        }
    }

    #[test]
    fn test_default_service() {
        let json = r#"{"url": "https://example.com"}"#;
        let params: ShortenUrlParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.service, "tinyurl");
    }

    #[test]
    fn test_success_format() {
        let result = ShortenUrlTool::execute(&params("https://example.com", "IS.GD"), &FixedShortener);
        assert_ne!(result.is_error, Some(true));
        assert_eq!(
            first_text(&result),
            "Original URL: https://example.com\nShortened URL: https://is.gd/abc"
        );
    }

    #[test]
    fn test_unsupported_service_makes_no_request() {
        let result = ShortenUrlTool::execute(&params("https://example.com", "bitly"), &NoNetwork);
        assert_eq!(result.is_error, Some(true));
        assert!(
            first_text(&result)
                .contains("Unsupported service: bitly. Available services: tinyurl, is.gd")
        );
    }

    #[test]
    fn test_invalid_urls_make_no_request() {
        for url in ["", "   ", "not a url", "ftp://example.com/file"] {
            let result = ShortenUrlTool::execute(&params(url, "tinyurl"), &NoNetwork);
            assert_eq!(result.is_error, Some(true), "url {:?}", url);
            assert!(first_text(&result).starts_with("Invalid arguments:"));
        }
    }

    #[test]
    fn test_handle_against_mock_server() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/api-create.php")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("https://tinyurl.com/xyz")
            .create();

        let mut config = Config::default();
        config.shortener.tinyurl_base_url = server.url();
        let context = ToolContext::new(Arc::new(config));

        let args = serde_json::json!({ "url": "https://www.rust-lang.org" });
        let result = ShortenUrlTool::handle(args.as_object().cloned().unwrap(), &context).unwrap();
        assert_eq!(
            first_text(&result),
            "Original URL: https://www.rust-lang.org\nShortened URL: https://tinyurl.com/xyz"
        );
    }

    #[test]
    fn test_http_failure_is_error_result() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/create.php")
            .with_status(502)
            .create();

        let mut config = Config::default();
        config.shortener.isgd_base_url = server.url();
        let context = ToolContext::new(Arc::new(config));

        let args = serde_json::json!({ "url": "https://example.com", "service": "is.gd" });
        let result = ShortenUrlTool::handle(args.as_object().cloned().unwrap(), &context).unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(first_text(&result), "Error shortening URL: is.gd returned HTTP 502");
    }
}
