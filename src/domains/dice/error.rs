//! Dice-specific error types.

use thiserror::Error;

/// Errors that can occur while parsing or rolling dice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    /// The notation does not match `[count]d<sides>[(+|-)modifier]`.
    #[error("Invalid dice notation '{0}'. Expected format like '2d6', 'd20' or '3d8-2'")]
    Syntax(String),

    /// A die needs at least two sides.
    #[error("Dice must have at least 2 sides (got {0})")]
    TooFewSides(u64),

    /// At least one die must be rolled.
    #[error("Must roll at least 1 die (got {0})")]
    TooFewDice(u64),

    /// A number in the notation exceeds the supported range.
    #[error("{what} out of range: {value} (max {max})")]
    OutOfRange {
        what: &'static str,
        value: String,
        max: u64,
    },

    /// The number of repetitions is outside the supported range.
    #[error("num_rolls must be between 1 and {max} (got {value})")]
    InvalidRollCount { value: u32, max: u32 },
}
