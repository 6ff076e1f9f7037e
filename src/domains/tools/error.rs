//! Tool-specific error types.
//!
//! The `Display` text of each variant is what the calling agent sees, so
//! every message is complete on its own.

use thiserror::Error;

use crate::domains::dice::DiceError;
use crate::domains::units::{ConversionError, USAGE_HINTS};
use crate::domains::web::WebError;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The dice notation or roll count was rejected.
    #[error("Error rolling dice: {0}")]
    MalformedNotation(#[from] DiceError),

    /// No resolver could convert the unit pair.
    #[error("Error converting units: {0}\n{hints}", hints = USAGE_HINTS)]
    ConversionUnsupported(#[from] ConversionError),

    /// An outbound HTTP call failed.
    #[error("Error {action}: {source}")]
    NetworkFailure {
        action: &'static str,
        #[source]
        source: WebError,
    },

    /// QR matrix, PNG or base64 encoding failed.
    #[error("Error generating QR code: {0}")]
    EncodingFailure(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "encoding failure" error.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::EncodingFailure(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Classify a web collaborator error raised while performing `action`.
    pub fn from_web(action: &'static str, err: WebError) -> Self {
        match err {
            WebError::UnsupportedService(_) | WebError::InvalidInput(_) => {
                Self::InvalidArguments(err.to_string())
            }
            WebError::NotConfigured(_) => Self::Internal(err.to_string()),
            source => Self::NetworkFailure { action, source },
        }
    }
}
