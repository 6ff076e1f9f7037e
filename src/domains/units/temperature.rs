//! Temperature override table.
//!
//! Celsius, Fahrenheit and Kelvin are affine scales, so they cannot live in
//! the multiplicative registry. The six conversions are closed-form and are
//! consulted before any other resolver.

use super::{Resolution, UnitResolver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    /// Accepts the bare scale name or abbreviation, optionally prefixed with
    /// `degree`/`degrees` joined by a space, `-` or `_`.
    fn parse(unit: &str) -> Option<Self> {
        let normalized = unit
            .to_lowercase()
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("_");
        let name = normalized
            .strip_prefix("degrees_")
            .or_else(|| normalized.strip_prefix("degree_"))
            .unwrap_or(&normalized);

        match name {
            "celsius" | "centigrade" | "c" | "°c" | "degc" => Some(Self::Celsius),
            "fahrenheit" | "f" | "°f" | "degf" => Some(Self::Fahrenheit),
            "kelvin" | "kelvins" | "k" => Some(Self::Kelvin),
            _ => None,
        }
    }
}

/// Convert a temperature if `(from, to)` is one of the six supported pairs.
///
/// Returns `None` for any other pair, including same-scale pairs.
pub fn convert_temperature(value: f64, from: &str, to: &str) -> Option<f64> {
    use Scale::*;

    let converted = match (Scale::parse(from)?, Scale::parse(to)?) {
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Celsius, Kelvin) => value + 273.15,
        (Kelvin, Celsius) => value - 273.15,
        (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + 273.15,
        (Kelvin, Fahrenheit) => (value - 273.15) * 9.0 / 5.0 + 32.0,
        _ => return None,
    };
    Some(converted)
}

/// Resolver wrapping [`convert_temperature`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TemperatureTable;

impl UnitResolver for TemperatureTable {
    fn name(&self) -> &'static str {
        "temperature"
    }

    fn precision(&self) -> usize {
        2
    }

    fn resolve(&self, value: f64, from: &str, to: &str) -> Resolution {
        match convert_temperature(value, from, to) {
            Some(result) => Resolution::Converted(result),
            None => Resolution::NotApplicable,
        }
    }
}
