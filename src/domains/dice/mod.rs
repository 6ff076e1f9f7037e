//! Dice domain.
//!
//! Parses dice notation (`2d6+3`), rolls it with an injectable die source
//! and renders a human-readable report.

mod error;
pub mod notation;
pub mod roller;

pub use error::DiceError;
pub use notation::DiceNotation;
pub use roller::{DieSource, MAX_ROLLS, RandomDice, RollResult, RollSession, evaluate, evaluate_with};
