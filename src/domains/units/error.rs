//! Unit conversion error types.

use thiserror::Error;

/// Errors that can occur while converting between units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The unit name is not known to any resolver.
    #[error("Unknown unit: '{0}'")]
    UnknownUnit(String),

    /// Both units are known but measure different things.
    #[error("Cannot convert from '{from}' ({from_dimension}) to '{to}' ({to_dimension})")]
    IncompatibleDimensions {
        from: String,
        from_dimension: &'static str,
        to: String,
        to_dimension: &'static str,
    },

    /// No resolver claimed the unit pair.
    #[error("No conversion available from '{from}' to '{to}'")]
    Unsupported { from: String, to: String },

    /// The input value cannot be converted.
    #[error("Value must be a finite number (got {0})")]
    NonFiniteValue(String),
}
