//! Unit conversion domain.
//!
//! Conversions go through an ordered chain of resolvers. The first resolver
//! that either converts or definitively fails wins:
//!
//! 1. [`TemperatureTable`] - closed-form affine temperature formulas
//! 2. [`UnitRegistry`] - multiplicative units grouped by dimension
//!
//! The temperature table must come first: treating offset scales as plain
//! multiples gives wrong answers.

use std::fmt;

mod error;
pub mod registry;
pub mod temperature;

pub use error::ConversionError;
pub use registry::{Dimension, UnitDef, UnitRegistry};
pub use temperature::{TemperatureTable, convert_temperature};

/// Hint block appended to conversion errors.
pub const USAGE_HINTS: &str = "Supported unit examples:\n\
- Length: meter, km, inch, foot, mile\n\
- Weight: gram, kg, pound, ounce\n\
- Temperature: celsius, fahrenheit, kelvin\n\
- Volume: liter, gallon, cup, milliliter";

/// Outcome of asking one resolver about a unit pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The resolver handled the pair.
    Converted(f64),
    /// The resolver does not handle this pair; try the next one.
    NotApplicable,
    /// The resolver claims the pair but cannot convert it.
    Failed(ConversionError),
}

/// One strategy in the conversion chain.
pub trait UnitResolver: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Decimal places used when rendering this resolver's results.
    fn precision(&self) -> usize;

    fn resolve(&self, value: f64, from: &str, to: &str) -> Resolution;
}

/// A successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub value: f64,
    pub from: String,
    pub result: f64,
    pub to: String,
    /// Decimal places for display.
    pub precision: usize,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {:.*} {}",
            self.value, self.from, self.precision, self.result, self.to
        )
    }
}

/// Ordered resolver chain.
pub struct UnitConverter {
    resolvers: Vec<Box<dyn UnitResolver>>,
}

impl UnitConverter {
    /// Chain with the temperature table first and the unit registry second.
    pub fn new() -> Self {
        Self::with_resolvers(vec![
            Box::new(TemperatureTable),
            Box::new(UnitRegistry::new()),
        ])
    }

    /// Chain with a custom resolver order.
    pub fn with_resolvers(resolvers: Vec<Box<dyn UnitResolver>>) -> Self {
        Self { resolvers }
    }

    /// Names of the resolvers, in the order they are tried.
    pub fn resolver_names(&self) -> Vec<&'static str> {
        self.resolvers.iter().map(|r| r.name()).collect()
    }

    /// Convert `value` from `from` to `to`, trying each resolver in turn.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<Conversion, ConversionError> {
        if !value.is_finite() {
            return Err(ConversionError::NonFiniteValue(value.to_string()));
        }

        for resolver in &self.resolvers {
            match resolver.resolve(value, from, to) {
                Resolution::Converted(result) => {
                    tracing::debug!("{} resolved {} -> {}", resolver.name(), from, to);
                    return Ok(Conversion {
                        value,
                        from: from.to_string(),
                        result,
                        to: to.to_string(),
                        precision: resolver.precision(),
                    });
                }
                Resolution::Failed(e) => return Err(e),
                Resolution::NotApplicable => continue,
            }
        }

        Err(ConversionError::Unsupported {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new()
    }
}
