//! Point-buy ability scores and their derived modifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AbilityScoreError;

/// Direction of a single-point adjustment from the +/- buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Increment,
    Decrement,
}

/// An ability score inside the point-buy range.
///
/// # Invariants
///
/// - The value is always within `AbilityScore::MIN..=AbilityScore::MAX` (8-15).
///   Both construction and deserialization go through [`AbilityScore::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct AbilityScore(u8);

impl AbilityScore {
    /// Lowest score purchasable with point buy.
    pub const MIN: u8 = 8;
    /// Highest score purchasable with point buy.
    pub const MAX: u8 = 15;

    /// Create a score, rejecting values outside 8-15.
    pub fn new(value: i32) -> Result<Self, AbilityScoreError> {
        if (i32::from(Self::MIN)..=i32::from(Self::MAX)).contains(&value) {
            // Range checked above, so the narrowing cannot truncate
            Ok(Self(value as u8))
        } else {
            Err(AbilityScoreError::OutOfRange(value))
        }
    }

    /// Parse raw form text.
    ///
    /// Only truly empty text yields `Ok(None)` (the field is unset).
    /// Whitespace-only text is not a number.
    pub fn parse_input(raw: &str) -> Result<Option<Self>, AbilityScoreError> {
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn modifier(self) -> AbilityModifier {
        AbilityModifier::from_score(i32::from(self.0))
    }

    /// Move one point in `direction`, staying put at either bound.
    pub fn step(self, direction: StepDirection) -> Self {
        match direction {
            StepDirection::Increment if self.0 < Self::MAX => Self(self.0 + 1),
            StepDirection::Decrement if self.0 > Self::MIN => Self(self.0 - 1),
            _ => self,
        }
    }
}

impl Default for AbilityScore {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<i32> for AbilityScore {
    type Error = AbilityScoreError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AbilityScore> for i32 {
    fn from(score: AbilityScore) -> Self {
        i32::from(score.0)
    }
}

impl FromStr for AbilityScore {
    type Err = AbilityScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i32 = s
            .trim()
            .parse()
            .map_err(|_| AbilityScoreError::NotANumber(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for AbilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a modifier is a penalty or not. Drives the red/green coloring in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierTone {
    Negative,
    NonNegative,
}

/// Ability modifier derived from a score: `floor((score - 10) / 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityModifier(i32);

impl AbilityModifier {
    /// Compute the modifier for any raw score.
    ///
    /// Rust's `/` rounds toward zero, so this uses Euclidean division which
    /// floors for a positive divisor (9 gives -1, not 0).
    pub fn from_score(score: i32) -> Self {
        Self((score - 10).div_euclid(2))
    }

    pub fn value(self) -> i32 {
        self.0
    }

    pub fn tone(self) -> ModifierTone {
        if self.0 < 0 {
            ModifierTone::Negative
        } else {
            ModifierTone::NonNegative
        }
    }
}

/// Signed display form: `+0`, `+2`, `-1`.
impl fmt::Display for AbilityModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_point_buy_value_is_accepted() {
        for v in 8..=15 {
            let score = AbilityScore::new(v).unwrap();
            assert_eq!(i32::from(score), v);
        }
    }

    #[test]
    fn values_outside_range_are_rejected() {
        for v in [-8, 0, 3, 7, 16, 18, 30, i32::MAX, i32::MIN] {
            assert_eq!(
                AbilityScore::new(v),
                Err(AbilityScoreError::OutOfRange(v))
            );
        }
    }

    #[test]
    fn parse_input_handles_empty_numeric_and_garbage() {
        assert_eq!(AbilityScore::parse_input(""), Ok(None));
        assert_eq!(
            AbilityScore::parse_input("   "),
            Err(AbilityScoreError::NotANumber("   ".to_string()))
        );
        assert_eq!(
            AbilityScore::parse_input(" 12 "),
            Ok(Some(AbilityScore::new(12).unwrap()))
        );
        assert_eq!(
            AbilityScore::parse_input("abc"),
            Err(AbilityScoreError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            AbilityScore::parse_input("12.5"),
            Err(AbilityScoreError::NotANumber("12.5".to_string()))
        );
        assert_eq!(
            AbilityScore::parse_input("-3"),
            Err(AbilityScoreError::OutOfRange(-3))
        );
    }

    #[test]
    fn modifier_uses_floor_division() {
        assert_eq!(AbilityModifier::from_score(1).value(), -5);
        assert_eq!(AbilityModifier::from_score(8).value(), -1);
        assert_eq!(AbilityModifier::from_score(9).value(), -1);
        assert_eq!(AbilityModifier::from_score(10).value(), 0);
        assert_eq!(AbilityModifier::from_score(11).value(), 0);
        assert_eq!(AbilityModifier::from_score(12).value(), 1);
        assert_eq!(AbilityModifier::from_score(15).value(), 2);
        assert_eq!(AbilityModifier::from_score(20).value(), 5);
    }

    #[test]
    fn modifier_matches_formula_across_range() {
        for v in 8..=15 {
            let expected = ((v - 10) as f64 / 2.0).floor() as i32;
            assert_eq!(AbilityScore::new(v).unwrap().modifier().value(), expected);
        }
    }

    #[test]
    fn modifier_display_is_signed() {
        assert_eq!(AbilityModifier::from_score(9).to_string(), "-1");
        assert_eq!(AbilityModifier::from_score(10).to_string(), "+0");
        assert_eq!(AbilityModifier::from_score(14).to_string(), "+2");
    }

    #[test]
    fn modifier_tone() {
        assert_eq!(AbilityModifier::from_score(8).tone(), ModifierTone::Negative);
        assert_eq!(AbilityModifier::from_score(10).tone(), ModifierTone::NonNegative);
        assert_eq!(AbilityModifier::from_score(15).tone(), ModifierTone::NonNegative);
    }

    #[test]
    fn step_is_clamped_at_bounds() {
        let max = AbilityScore::new(15).unwrap();
        let min = AbilityScore::new(8).unwrap();
        assert_eq!(max.step(StepDirection::Increment), max);
        assert_eq!(min.step(StepDirection::Decrement), min);
        assert_eq!(min.step(StepDirection::Increment).value(), 9);
        assert_eq!(max.step(StepDirection::Decrement).value(), 14);
    }

    #[test]
    fn deserialize_enforces_range() {
        let score: AbilityScore = serde_json::from_str("13").unwrap();
        assert_eq!(score.value(), 13);
        assert!(serde_json::from_str::<AbilityScore>("16").is_err());
        assert_eq!(serde_json::to_string(&score).unwrap(), "13");
    }
}
