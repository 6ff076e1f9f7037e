//! Rolling dice and rendering the results.

use std::fmt;

use rand::Rng;

use super::error::DiceError;
use super::notation::DiceNotation;

/// Largest number of repetitions in one session.
pub const MAX_ROLLS: u32 = 100;

/// A source of die outcomes.
///
/// Production code rolls with [`RandomDice`]; tests substitute a scripted
/// source so reports are reproducible.
pub trait DieSource {
    /// Return an outcome in `[1, sides]`.
    fn roll(&mut self, sides: u32) -> u32;
}

/// Non-cryptographic uniform die source backed by any [`Rng`].
pub struct RandomDice<R>(pub R);

impl RandomDice<rand::rngs::ThreadRng> {
    /// Die source using the thread-local generator.
    pub fn thread_local() -> Self {
        Self(rand::thread_rng())
    }
}

impl<R: Rng> DieSource for RandomDice<R> {
    fn roll(&mut self, sides: u32) -> u32 {
        self.0.gen_range(1..=sides)
    }
}

/// One evaluation of a notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollResult {
    /// Individual die outcomes in the order rolled.
    pub outcomes: Vec<u32>,
    /// Modifier applied to the sum.
    pub modifier: i64,
    /// `sum(outcomes) + modifier`.
    pub total: i64,
}

impl RollResult {
    fn roll(notation: &DiceNotation, dice: &mut impl DieSource) -> Self {
        let outcomes: Vec<u32> = (0..notation.count)
            .map(|_| dice.roll(notation.sides))
            .collect();
        let sum: i64 = outcomes.iter().map(|&o| i64::from(o)).sum();
        Self {
            total: sum + notation.modifier,
            outcomes,
            modifier: notation.modifier,
        }
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcomes: Vec<String> = self.outcomes.iter().map(u32::to_string).collect();
        write!(f, "[{}]", outcomes.join(", "))?;
        match self.modifier {
            0 => {}
            m if m > 0 => write!(f, " + {}", m)?,
            m => write!(f, " - {}", m.unsigned_abs())?,
        }
        write!(f, " = {}", self.total)
    }
}

/// A series of independent rolls of the same notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollSession {
    pub notation: DiceNotation,
    pub rolls: Vec<RollResult>,
    pub grand_total: i64,
}

impl RollSession {
    /// Roll `notation` `num_rolls` times using `dice`.
    pub fn roll(
        notation: DiceNotation,
        num_rolls: u32,
        dice: &mut impl DieSource,
    ) -> Result<Self, DiceError> {
        if num_rolls < 1 || num_rolls > MAX_ROLLS {
            return Err(DiceError::InvalidRollCount {
                value: num_rolls,
                max: MAX_ROLLS,
            });
        }

        let rolls: Vec<RollResult> = (0..num_rolls)
            .map(|_| RollResult::roll(&notation, dice))
            .collect();
        let grand_total = rolls.iter().map(|r| r.total).sum();

        Ok(Self {
            notation,
            rolls,
            grand_total,
        })
    }
}

impl fmt::Display for RollSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rolls.len() > 1 {
            writeln!(f, "Rolling {} ({} times):", self.notation, self.rolls.len())?;
        } else {
            writeln!(f, "Rolling {}:", self.notation)?;
        }
        for (i, roll) in self.rolls.iter().enumerate() {
            write!(f, "Roll {}: {}", i + 1, roll)?;
            if i + 1 < self.rolls.len() {
                writeln!(f)?;
            }
        }
        if self.rolls.len() > 1 {
            write!(f, "\nGrand total: {}", self.grand_total)?;
        }
        Ok(())
    }
}

/// Parse `notation`, roll it `num_rolls` times and render the report.
pub fn evaluate_with(
    notation: &str,
    num_rolls: u32,
    dice: &mut impl DieSource,
) -> Result<String, DiceError> {
    let notation = DiceNotation::parse(notation)?;
    let session = RollSession::roll(notation, num_rolls, dice)?;
    Ok(session.to_string())
}

/// [`evaluate_with`] using the thread-local random generator.
pub fn evaluate(notation: &str, num_rolls: u32) -> Result<String, DiceError> {
    evaluate_with(notation, num_rolls, &mut RandomDice::thread_local())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Replays a fixed list of outcomes.
    pub(crate) struct ScriptedDice(pub std::vec::IntoIter<u32>);

    impl ScriptedDice {
        pub(crate) fn new(outcomes: Vec<u32>) -> Self {
            Self(outcomes.into_iter())
        }
    }

    impl DieSource for ScriptedDice {
        fn roll(&mut self, _sides: u32) -> u32 {
            self.0.next().expect("scripted dice ran out of outcomes")
        }
    }

    #[test]
    fn test_scripted_session_report() {
        let mut dice = ScriptedDice::new(vec![4, 2, 5]);
        let report = evaluate_with("1d6", 3, &mut dice).unwrap();
        assert_eq!(
            report,
            "Rolling 1d6 (3 times):\nRoll 1: [4] = 4\nRoll 2: [2] = 2\nRoll 3: [5] = 5\nGrand total: 11"
        );
    }

    #[test]
    fn test_single_roll_has_no_grand_total() {
        let mut dice = ScriptedDice::new(vec![4, 2]);
        let report = evaluate_with("2d6+3", 1, &mut dice).unwrap();
        assert_eq!(report, "Rolling 2d6+3:\nRoll 1: [4, 2] + 3 = 9");
    }

    #[test]
    fn test_negative_modifier_rendering() {
        let mut dice = ScriptedDice::new(vec![1, 1, 3]);
        let report = evaluate_with("3d8-2", 1, &mut dice).unwrap();
        assert_eq!(report, "Rolling 3d8-2:\nRoll 1: [1, 1, 3] - 2 = 3");
    }

    #[test]
    fn test_session_totals() {
        let notation = DiceNotation::parse("2d4+1").unwrap();
        let mut dice = ScriptedDice::new(vec![1, 2, 3, 4]);
        let session = RollSession::roll(notation, 2, &mut dice).unwrap();
        assert_eq!(session.rolls[0].total, 4);
        assert_eq!(session.rolls[1].total, 8);
        assert_eq!(session.grand_total, 12);
    }

    #[test]
    fn test_invalid_roll_count() {
        let mut dice = ScriptedDice::new(vec![]);
        assert_eq!(
            evaluate_with("1d6", 0, &mut dice),
            Err(DiceError::InvalidRollCount { value: 0, max: MAX_ROLLS })
        );
        assert!(evaluate_with("1d6", MAX_ROLLS + 1, &mut dice).is_err());
    }

    #[test]
    fn test_malformed_notation_does_not_roll() {
        // An empty script would panic if any die were drawn.
        let mut dice = ScriptedDice::new(vec![]);
        for input in ["", "1d1", "0d6", "abc", "2d"] {
            assert!(evaluate_with(input, 1, &mut dice).is_err());
        }
    }

    #[test]
    fn test_evaluate_with_thread_rng() {
        let report = evaluate("d20", 1).unwrap();
        assert!(report.starts_with("Rolling 1d20:\nRoll 1: ["));
    }

    proptest! {
        #[test]
        fn prop_outcomes_in_range_and_totals_add_up(
            count in 1u32..=100,
            sides in 2u32..=1000,
            modifier in -1000i64..=1000,
            seed in any::<u64>(),
        ) {
            let notation = DiceNotation::new(count, sides, modifier).unwrap();
            let mut dice = RandomDice(StdRng::seed_from_u64(seed));
            let session = RollSession::roll(notation, 1, &mut dice).unwrap();
            let roll = &session.rolls[0];

            prop_assert_eq!(roll.outcomes.len(), count as usize);
            prop_assert!(roll.outcomes.iter().all(|&o| (1..=sides).contains(&o)));
            let sum: i64 = roll.outcomes.iter().map(|&o| i64::from(o)).sum();
            prop_assert_eq!(roll.total, sum + modifier);
        }

        #[test]
        fn prop_parsed_notation_rolls_in_range(
            count in 1u32..=100,
            sides in 2u32..=1000,
            modifier in -1000i64..=1000,
        ) {
            let text = if modifier < 0 {
                format!("{}d{}{}", count, sides, modifier)
            } else {
                format!("{}d{}+{}", count, sides, modifier)
            };
            let notation = DiceNotation::parse(&text).unwrap();
            prop_assert_eq!(notation, DiceNotation { count, sides, modifier });
        }

        #[test]
        fn prop_sides_below_two_rejected(count in 1u32..=100, sides in 0u32..2) {
            let text = format!("{}d{}", count, sides);
            prop_assert_eq!(DiceNotation::parse(&text), Err(DiceError::TooFewSides(sides.into())));
        }
    }
}
