//! URL shortening collaborators (TinyURL, is.gd).

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use tracing::info;

use super::error::WebError;
use crate::core::config::ShortenerConfig;

/// Supported shortening services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortenService {
    TinyUrl,
    IsGd,
}

impl ShortenService {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TinyUrl => "tinyurl",
            Self::IsGd => "is.gd",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::TinyUrl => "TinyURL",
            Self::IsGd => "is.gd",
        }
    }
}

impl FromStr for ShortenService {
    type Err = WebError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tinyurl" => Ok(Self::TinyUrl),
            "is.gd" => Ok(Self::IsGd),
            _ => Err(WebError::UnsupportedService(s.to_string())),
        }
    }
}

impl fmt::Display for ShortenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that can shorten a URL.
pub trait UrlShortener {
    fn shorten(&self, url: &str, service: ShortenService) -> Result<String, WebError>;
}

/// Blocking HTTP client for the public shortening APIs.
pub struct ShortenerClient {
    client: Client,
    tinyurl_base: String,
    isgd_base: String,
}

impl ShortenerClient {
    pub fn new(config: &ShortenerConfig) -> Result<Self, WebError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            tinyurl_base: config.tinyurl_base_url.trim_end_matches('/').to_string(),
            isgd_base: config.isgd_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn tinyurl(&self, url: &str) -> Result<Response, WebError> {
        let query = serde_urlencoded::to_string([("url", url)])
            .map_err(|e| WebError::invalid_input(e.to_string()))?;
        let endpoint = format!("{}/api-create.php?{}", self.tinyurl_base, query);
        Ok(self.client.get(endpoint).send()?)
    }

    fn isgd(&self, url: &str) -> Result<Response, WebError> {
        let endpoint = format!("{}/create.php", self.isgd_base);
        Ok(self
            .client
            .post(endpoint)
            .form(&[("format", "simple"), ("url", url)])
            .send()?)
    }
}

impl UrlShortener for ShortenerClient {
    fn shorten(&self, url: &str, service: ShortenService) -> Result<String, WebError> {
        info!("Shortening URL with {}: {}", service, url);

        let response = match service {
            ShortenService::TinyUrl => self.tinyurl(url)?,
            ShortenService::IsGd => self.isgd(url)?,
        };

        let status = response.status();
        if !status.is_success() {
            return Err(WebError::Status {
                service: service.display_name(),
                status: status.as_u16(),
            });
        }

        let shortened = response.text()?.trim().to_string();
        if shortened.is_empty() {
            return Err(WebError::parse(service.display_name(), "empty response body"));
        }
        Ok(shortened)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn test_client(server: &mockito::Server) -> ShortenerClient {
        ShortenerClient::new(&ShortenerConfig {
            tinyurl_base_url: server.url(),
            isgd_base_url: server.url(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_service_parsing() {
        assert_eq!("tinyurl".parse::<ShortenService>().unwrap(), ShortenService::TinyUrl);
        assert_eq!("TinyURL".parse::<ShortenService>().unwrap(), ShortenService::TinyUrl);
        assert_eq!(" IS.GD ".parse::<ShortenService>().unwrap(), ShortenService::IsGd);

        let err = "bitly".parse::<ShortenService>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported service: bitly. Available services: tinyurl, is.gd"
        );
    }

    #[test]
    fn test_tinyurl_encodes_query() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api-create.php")
            .match_query(Matcher::UrlEncoded(
                "url".into(),
                "https://example.com/a?b=1&c=2".into(),
            ))
            .with_status(200)
            .with_body("https://tinyurl.com/abc123\n")
            .create();

        let short = test_client(&server)
            .shorten("https://example.com/a?b=1&c=2", ShortenService::TinyUrl)
            .unwrap();

        mock.assert();
        assert_eq!(short, "https://tinyurl.com/abc123");
    }

    #[test]
    fn test_isgd_posts_form() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/create.php")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("format".into(), "simple".into()),
                Matcher::UrlEncoded("url".into(), "https://example.com".into()),
            ]))
            .with_status(200)
            .with_body("https://is.gd/xyz")
            .create();

        let short = test_client(&server)
            .shorten("https://example.com", ShortenService::IsGd)
            .unwrap();

        mock.assert();
        assert_eq!(short, "https://is.gd/xyz");
    }

    #[test]
    fn test_non_success_status() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/api-create.php")
            .match_query(Matcher::Any)
            .with_status(503)
            .create();

        let err = test_client(&server)
            .shorten("https://example.com", ShortenService::TinyUrl)
            .unwrap_err();
        assert_eq!(err.to_string(), "TinyURL returned HTTP 503");
    }

    #[test]
    fn test_connection_refused_is_network_error() {
        let client = ShortenerClient::new(&ShortenerConfig {
            tinyurl_base_url: "http://127.0.0.1:1".to_string(),
            isgd_base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 2,
        })
        .unwrap();

        let err = client
            .shorten("https://example.com", ShortenService::TinyUrl)
            .unwrap_err();
        assert!(matches!(err, WebError::Request(_)));
    }
}
