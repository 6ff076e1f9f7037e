//! General-purpose unit registry.
//!
//! Every unit here is a pure multiple of its dimension's base unit, so a
//! conversion is `value * from.factor / to.factor`. Offset scales
//! (temperatures) are intentionally absent; see [`super::temperature`].

use std::collections::HashMap;

use super::error::ConversionError;
use super::{Resolution, UnitResolver};

/// Physical quantity a unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Length,
    Mass,
    Volume,
    Time,
    Area,
    Speed,
    Data,
}

impl Dimension {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Mass => "mass",
            Self::Volume => "volume",
            Self::Time => "time",
            Self::Area => "area",
            Self::Speed => "speed",
            Self::Data => "data",
        }
    }
}

/// A unit definition: its dimension and its size in base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    pub dimension: Dimension,
    pub factor: f64,
}

use Dimension::*;

/// `(aliases, dimension, factor to base unit)`.
///
/// Base units: meter, kilogram, liter, second, square meter,
/// meter per second, byte. Volume units are US customary.
const UNITS: &[(&[&str], Dimension, f64)] = &[
    // Length
    (&["meter", "metre", "m"], Length, 1.0),
    (&["kilometer", "kilometre", "km"], Length, 1000.0),
    (&["centimeter", "centimetre", "cm"], Length, 0.01),
    (&["millimeter", "millimetre", "mm"], Length, 0.001),
    (&["micrometer", "micrometre", "micron", "um", "µm"], Length, 1e-6),
    (&["nanometer", "nanometre", "nm"], Length, 1e-9),
    (&["inch", "inches", "in"], Length, 0.0254),
    (&["foot", "feet", "ft"], Length, 0.3048),
    (&["yard", "yd"], Length, 0.9144),
    (&["mile", "mi"], Length, 1609.344),
    (&["nautical_mile", "nmi"], Length, 1852.0),
    // Mass
    (&["kilogram", "kg"], Mass, 1.0),
    (&["gram", "g"], Mass, 0.001),
    (&["milligram", "mg"], Mass, 1e-6),
    (&["microgram", "ug", "µg"], Mass, 1e-9),
    (&["tonne", "metric_ton", "t"], Mass, 1000.0),
    (&["ton", "short_ton"], Mass, 907.18474),
    (&["pound", "lb", "lbs"], Mass, 0.45359237),
    (&["ounce", "oz"], Mass, 0.028349523125),
    (&["stone", "st"], Mass, 6.35029318),
    // Volume
    (&["liter", "litre", "l"], Volume, 1.0),
    (&["milliliter", "millilitre", "ml"], Volume, 0.001),
    (&["centiliter", "centilitre", "cl"], Volume, 0.01),
    (&["deciliter", "decilitre", "dl"], Volume, 0.1),
    (&["cubic_meter", "cubic_metre", "m3", "m^3"], Volume, 1000.0),
    (&["cubic_centimeter", "cubic_centimetre", "cc", "cm3", "cm^3"], Volume, 0.001),
    (&["gallon", "gal"], Volume, 3.785411784),
    (&["imperial_gallon"], Volume, 4.54609),
    (&["quart", "qt"], Volume, 0.946352946),
    (&["pint", "pt"], Volume, 0.473176473),
    (&["cup"], Volume, 0.2365882365),
    (&["fluid_ounce", "fl_oz", "floz"], Volume, 0.0295735295625),
    (&["tablespoon", "tbsp"], Volume, 0.01478676478125),
    (&["teaspoon", "tsp"], Volume, 0.00492892159375),
    // Time
    (&["second", "sec", "s"], Time, 1.0),
    (&["millisecond", "ms"], Time, 0.001),
    (&["microsecond", "us", "µs"], Time, 1e-6),
    (&["minute", "min"], Time, 60.0),
    (&["hour", "hr", "h"], Time, 3600.0),
    (&["day", "d"], Time, 86_400.0),
    (&["week", "wk"], Time, 604_800.0),
    (&["year", "yr"], Time, 31_557_600.0),
    // Area
    (&["square_meter", "square_metre", "m2", "m^2", "sq_m"], Area, 1.0),
    (&["square_kilometer", "square_kilometre", "km2", "km^2", "sq_km"], Area, 1e6),
    (&["square_centimeter", "square_centimetre", "cm2", "cm^2"], Area, 1e-4),
    (&["square_foot", "square_feet", "ft2", "ft^2", "sq_ft"], Area, 0.09290304),
    (&["square_inch", "square_inches", "in2", "in^2", "sq_in"], Area, 0.00064516),
    (&["square_mile", "mi2", "mi^2", "sq_mi"], Area, 2_589_988.110336),
    (&["acre", "ac"], Area, 4046.8564224),
    (&["hectare", "ha"], Area, 10_000.0),
    // Speed
    (&["meter_per_second", "meters_per_second", "m/s", "mps"], Speed, 1.0),
    (&["kilometer_per_hour", "kilometers_per_hour", "km/h", "kph", "kmh"], Speed, 1.0 / 3.6),
    (&["mile_per_hour", "miles_per_hour", "mph"], Speed, 0.44704),
    (&["foot_per_second", "feet_per_second", "ft/s", "fps"], Speed, 0.3048),
    (&["knot", "kn", "kt"], Speed, 1852.0 / 3600.0),
    // Data
    (&["bit"], Data, 0.125),
    (&["byte"], Data, 1.0),
    (&["kilobyte", "kb"], Data, 1e3),
    (&["megabyte", "mb"], Data, 1e6),
    (&["gigabyte", "gb"], Data, 1e9),
    (&["terabyte", "tb"], Data, 1e12),
    (&["kibibyte", "kib"], Data, 1024.0),
    (&["mebibyte", "mib"], Data, 1_048_576.0),
    (&["gibibyte", "gib"], Data, 1_073_741_824.0),
];

/// Lookup table from normalized unit name to definition.
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    units: HashMap<String, UnitDef>,
}

impl UnitRegistry {
    /// Build the registry from the built-in unit table.
    pub fn new() -> Self {
        let mut units = HashMap::new();
        for (aliases, dimension, factor) in UNITS {
            for alias in *aliases {
                units.insert(
                    (*alias).to_string(),
                    UnitDef {
                        dimension: *dimension,
                        factor: *factor,
                    },
                );
            }
        }
        Self { units }
    }

    /// Look up a unit by name. Case, surrounding whitespace, inner
    /// spaces/hyphens and a trailing plural `s` are ignored.
    pub fn lookup(&self, name: &str) -> Option<UnitDef> {
        let key = normalize(name);
        if let Some(def) = self.units.get(&key) {
            return Some(*def);
        }
        key.strip_suffix('s')
            .filter(|singular| !singular.is_empty())
            .and_then(|singular| self.units.get(singular))
            .copied()
    }

    /// Convert `value` from one unit to another.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        let from_def = self
            .lookup(from)
            .ok_or_else(|| ConversionError::UnknownUnit(from.to_string()))?;
        let to_def = self
            .lookup(to)
            .ok_or_else(|| ConversionError::UnknownUnit(to.to_string()))?;

        if from_def.dimension != to_def.dimension {
            return Err(ConversionError::IncompatibleDimensions {
                from: from.to_string(),
                from_dimension: from_def.dimension.as_str(),
                to: to.to_string(),
                to_dimension: to_def.dimension.as_str(),
            });
        }

        Ok(value * from_def.factor / to_def.factor)
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitResolver for UnitRegistry {
    fn name(&self) -> &'static str {
        "registry"
    }

    fn precision(&self) -> usize {
        6
    }

    fn resolve(&self, value: f64, from: &str, to: &str) -> Resolution {
        match self.convert(value, from, to) {
            Ok(result) => Resolution::Converted(result),
            Err(e) => Resolution::Failed(e),
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use proptest::sample::select;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_aliases_are_unique() {
        let total: usize = UNITS.iter().map(|(aliases, _, _)| aliases.len()).sum();
        assert_eq!(UnitRegistry::new().units.len(), total);
    }

    #[test]
    fn test_common_conversions() {
        let registry = UnitRegistry::new();
        assert!(approx(registry.convert(1.0, "km", "meter").unwrap(), 1000.0));
        assert!(approx(registry.convert(1.0, "mile", "km").unwrap(), 1.609344));
        assert!(approx(registry.convert(12.0, "inch", "foot").unwrap(), 1.0));
        assert!(approx(registry.convert(1.0, "pound", "gram").unwrap(), 453.59237));
        assert!(approx(registry.convert(1.0, "gallon", "cup").unwrap(), 16.0));
        assert!(approx(registry.convert(2.0, "hours", "minutes").unwrap(), 120.0));
        assert!(approx(registry.convert(1.0, "acre", "square feet").unwrap(), 43_560.0));
        assert!(approx(registry.convert(1.0, "gib", "mib").unwrap(), 1024.0));
    }

    #[test]
    fn test_lookup_normalization() {
        let registry = UnitRegistry::new();
        assert!(registry.lookup("Meters").is_some());
        assert!(registry.lookup("  KM ").is_some());
        assert!(registry.lookup("fluid ounce").is_some());
        assert!(registry.lookup("fluid-ounces").is_some());
        assert!(registry.lookup("s").is_some());
        assert!(registry.lookup("furlong").is_none());
    }

    #[test]
    fn test_temperatures_are_not_registered() {
        let registry = UnitRegistry::new();
        assert!(registry.lookup("celsius").is_none());
        assert!(registry.lookup("fahrenheit").is_none());
        assert!(registry.lookup("kelvin").is_none());
    }

    #[test]
    fn test_unknown_unit() {
        let registry = UnitRegistry::new();
        assert_eq!(
            registry.convert(1.0, "furlong", "meter"),
            Err(ConversionError::UnknownUnit("furlong".to_string()))
        );
    }

    #[test]
    fn test_incompatible_dimensions() {
        let registry = UnitRegistry::new();
        let err = registry.convert(1.0, "meter", "gram").unwrap_err();
        assert!(matches!(err, ConversionError::IncompatibleDimensions { .. }));
        assert!(err.to_string().contains("length"));
        assert!(err.to_string().contains("mass"));
    }

    fn same_dimension_pair() -> impl Strategy<Value = (&'static str, &'static str)> {
        let dims = [
            Dimension::Length,
            Dimension::Mass,
            Dimension::Volume,
            Dimension::Time,
            Dimension::Area,
            Dimension::Speed,
            Dimension::Data,
        ];
        select(dims.to_vec()).prop_flat_map(|dim| {
            let names: Vec<&'static str> = UNITS
                .iter()
                .filter(|(_, d, _)| *d == dim)
                .map(|(aliases, _, _)| aliases[0])
                .collect();
            (select(names.clone()), select(names))
        })
    }

    proptest! {
        #[test]
        fn prop_round_trip(
            (from, to) in same_dimension_pair(),
            value in -1.0e6f64..1.0e6,
        ) {
            let registry = UnitRegistry::new();
            let there = registry.convert(value, from, to).unwrap();
            let back = registry.convert(there, to, from).unwrap();
            prop_assert!(approx(back, value), "{} {} -> {} {} -> {}", value, from, there, to, back);
        }
    }
}
