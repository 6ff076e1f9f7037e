//! Dice notation parsing.
//!
//! Accepts the usual tabletop shorthand `[count]d<sides>[(+|-)modifier]`,
//! case-insensitive, e.g. `d20`, `2d6+3`, `3D8 - 2`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::error::DiceError;

/// Largest number of dice accepted in a single roll.
pub const MAX_DICE: u32 = 1000;

/// Largest number of sides accepted for a die.
pub const MAX_SIDES: u32 = 1_000_000;

/// Largest absolute modifier accepted.
pub const MAX_MODIFIER: i64 = 1_000_000;

static NOTATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*([0-9]*)\s*d\s*([0-9]+)\s*(?:([+-])\s*([0-9]+))?\s*$")
        .expect("dice notation regex is valid")
});

/// A parsed dice expression such as `2d6+3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceNotation {
    /// Number of dice rolled (at least 1).
    pub count: u32,
    /// Number of sides on each die (at least 2).
    pub sides: u32,
    /// Flat value added to the sum of the dice.
    pub modifier: i64,
}

impl DiceNotation {
    /// Build a notation, checking the count and sides invariants.
    pub fn new(count: u32, sides: u32, modifier: i64) -> Result<Self, DiceError> {
        if count < 1 {
            return Err(DiceError::TooFewDice(count.into()));
        }
        if count > MAX_DICE {
            return Err(out_of_range("Dice count", count, MAX_DICE.into()));
        }
        if sides < 2 {
            return Err(DiceError::TooFewSides(sides.into()));
        }
        if sides > MAX_SIDES {
            return Err(out_of_range("Number of sides", sides, MAX_SIDES.into()));
        }
        if modifier.abs() > MAX_MODIFIER {
            return Err(out_of_range("Modifier", modifier, MAX_MODIFIER as u64));
        }
        Ok(Self {
            count,
            sides,
            modifier,
        })
    }

    /// Parse a notation string.
    pub fn parse(input: &str) -> Result<Self, DiceError> {
        let caps = NOTATION_RE
            .captures(input)
            .ok_or_else(|| DiceError::Syntax(input.to_string()))?;

        let count = match caps.get(1).map(|m| m.as_str()) {
            None | Some("") => 1,
            Some(digits) => parse_bounded(digits, "Dice count", MAX_DICE.into())?,
        };
        let sides = parse_bounded(&caps[2], "Number of sides", MAX_SIDES.into())?;
        let modifier = match (caps.get(3), caps.get(4)) {
            (Some(sign), Some(digits)) => {
                let magnitude =
                    parse_bounded(digits.as_str(), "Modifier", MAX_MODIFIER as u64)? as i64;
                if sign.as_str() == "-" { -magnitude } else { magnitude }
            }
            _ => 0,
        };

        // Both values are bounded by u32 maxima above.
        Self::new(count as u32, sides as u32, modifier)
    }
}

impl FromStr for DiceNotation {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DiceNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{}", m),
            m => write!(f, "{}", m),
        }
    }
}

/// Parse a run of digits, rejecting values above `max`.
///
/// Zero passes through so the caller can report it as a dedicated error.
fn parse_bounded(digits: &str, what: &'static str, max: u64) -> Result<u64, DiceError> {
    let value: u64 = digits
        .parse()
        .map_err(|_| out_of_range(what, digits, max))?;
    if value > max {
        return Err(out_of_range(what, value, max));
    }
    Ok(value)
}

fn out_of_range(what: &'static str, value: impl ToString, max: u64) -> DiceError {
    DiceError::OutOfRange {
        what,
        value: value.to_string(),
        max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_notation() {
        let n = DiceNotation::parse("2d6+3").unwrap();
        assert_eq!(n, DiceNotation { count: 2, sides: 6, modifier: 3 });
    }

    #[test]
    fn test_parse_defaults() {
        let n = DiceNotation::parse("d20").unwrap();
        assert_eq!(n.count, 1);
        assert_eq!(n.sides, 20);
        assert_eq!(n.modifier, 0);
    }

    #[test]
    fn test_parse_negative_modifier_and_case() {
        let n = DiceNotation::parse(" 3D8 - 2 ").unwrap();
        assert_eq!(n, DiceNotation { count: 3, sides: 8, modifier: -2 });
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "   ", "d", "2d", "6", "2x6", "2d6+", "2d6*3", "two d six", "2d6+3d4"] {
            assert!(
                matches!(DiceNotation::parse(input), Err(DiceError::Syntax(_))),
                "expected syntax error for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_rejects_too_few_sides() {
        assert_eq!(DiceNotation::parse("1d1"), Err(DiceError::TooFewSides(1)));
        assert_eq!(DiceNotation::parse("1d0"), Err(DiceError::TooFewSides(0)));
    }

    #[test]
    fn test_parse_rejects_zero_dice() {
        assert_eq!(DiceNotation::parse("0d6"), Err(DiceError::TooFewDice(0)));
    }

    #[test]
    fn test_parse_rejects_huge_numbers() {
        assert!(matches!(
            DiceNotation::parse("99999999999999999999999d6"),
            Err(DiceError::OutOfRange { .. })
        ));
        assert!(matches!(
            DiceNotation::parse("1d6+5000000"),
            Err(DiceError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(DiceNotation::parse("d20").unwrap().to_string(), "1d20");
        assert_eq!(DiceNotation::parse("2D6 + 3").unwrap().to_string(), "2d6+3");
        assert_eq!(DiceNotation::parse("3d8-2").unwrap().to_string(), "3d8-2");
    }
}
