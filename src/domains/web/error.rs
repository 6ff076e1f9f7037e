//! Web collaborator error types.

use thiserror::Error;

/// Errors from outbound HTTP collaborators.
#[derive(Debug, Error)]
pub enum WebError {
    /// The request could not be sent or the connection failed/timed out.
    #[error("Network error: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("{service} returned HTTP {status}")]
    Status { service: &'static str, status: u16 },

    /// The response body could not be understood.
    #[error("Failed to parse {service} response: {message}")]
    Parse {
        service: &'static str,
        message: String,
    },

    /// A required credential is missing.
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// The caller supplied an unusable input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The requested shortening service does not exist.
    #[error("Unsupported service: {0}. Available services: tinyurl, is.gd")]
    UnsupportedService(String),
}

impl WebError {
    pub fn parse(service: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            service,
            message: message.into(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
