//! AbilityLedger aggregate - the six point-buy scores of a character draft
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: scores are only reachable through [`AbilityLedger::score`]
//! - **Newtypes**: `AbilityScore` is valid by construction, so the 8-15 range
//!   invariant holds for every slot that is set
//! - **Mutations return outcomes**: `ScoreChange` tells the caller what happened

use serde::{Deserialize, Serialize};

use crate::error::AbilityScoreError;
use crate::game_systems::point_buy::{self, POINT_BUY_BUDGET};
use crate::value_objects::{Ability, AbilityModifier, AbilityScore, StepDirection};

/// Result of a ledger mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreChange {
    /// The slot now holds this score
    Set(AbilityScore),
    /// The slot was emptied (field being edited)
    Cleared,
    /// Nothing changed (at a bound, unset, or same value)
    Unchanged,
}

/// Six ability scores under the point-buy rule.
///
/// # Invariants
///
/// - Each slot is either unset or holds a score in 8-15
/// - Exceeding the budget is allowed; it is reported by [`AbilityLedger::is_valid`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityLedger {
    strength: Option<AbilityScore>,
    dexterity: Option<AbilityScore>,
    constitution: Option<AbilityScore>,
    intelligence: Option<AbilityScore>,
    wisdom: Option<AbilityScore>,
    charisma: Option<AbilityScore>,
}

impl Default for AbilityLedger {
    /// Every ability starts at 8, costing nothing.
    fn default() -> Self {
        let base = Some(AbilityScore::default());
        Self {
            strength: base,
            dexterity: base,
            constitution: base,
            intelligence: base,
            wisdom: base,
            charisma: base,
        }
    }
}

impl AbilityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from explicit scores in `Ability::ALL` order.
    pub fn from_scores(scores: [Option<AbilityScore>; 6]) -> Self {
        let [strength, dexterity, constitution, intelligence, wisdom, charisma] = scores;
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn score(&self, ability: Ability) -> Option<AbilityScore> {
        *self.slot(ability)
    }

    /// Scores in `Ability::ALL` order.
    pub fn scores(&self) -> [Option<AbilityScore>; 6] {
        Ability::ALL.map(|ability| self.score(ability))
    }

    /// Modifier for an ability, `None` while the field is unset.
    pub fn modifier(&self, ability: Ability) -> Option<AbilityModifier> {
        self.score(ability).map(AbilityScore::modifier)
    }

    // =========================================================================
    // Point-buy totals
    // =========================================================================

    pub fn total_spent(&self) -> i32 {
        point_buy::total_cost(self.scores())
    }

    /// Budget left to spend. Negative when over budget.
    pub fn remaining(&self) -> i32 {
        POINT_BUY_BUDGET - self.total_spent()
    }

    pub fn is_valid(&self) -> bool {
        self.remaining() >= 0
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Write raw form text into a slot, reporting why it was refused.
    ///
    /// Empty text clears the slot; whitespace-only text does not. On error the
    /// slot is left untouched.
    pub fn try_set_score(
        &mut self,
        ability: Ability,
        raw: &str,
    ) -> Result<ScoreChange, AbilityScoreError> {
        let parsed = AbilityScore::parse_input(raw)?;
        Ok(self.replace(ability, parsed))
    }

    /// Write raw form text into a slot. Invalid input is ignored.
    pub fn set_score(&mut self, ability: Ability, raw: &str) -> ScoreChange {
        self.try_set_score(ability, raw)
            .unwrap_or(ScoreChange::Unchanged)
    }

    /// Adjust a slot by one point. No-op at either bound or while unset.
    pub fn step(&mut self, ability: Ability, direction: StepDirection) -> ScoreChange {
        match self.score(ability) {
            Some(current) => self.replace(ability, Some(current.step(direction))),
            None => ScoreChange::Unchanged,
        }
    }

    fn replace(&mut self, ability: Ability, next: Option<AbilityScore>) -> ScoreChange {
        let slot = self.slot_mut(ability);
        if *slot == next {
            return ScoreChange::Unchanged;
        }
        *slot = next;
        match next {
            Some(score) => ScoreChange::Set(score),
            None => ScoreChange::Cleared,
        }
    }

    fn slot(&self, ability: Ability) -> &Option<AbilityScore> {
        match ability {
            Ability::Str => &self.strength,
            Ability::Dex => &self.dexterity,
            Ability::Con => &self.constitution,
            Ability::Int => &self.intelligence,
            Ability::Wis => &self.wisdom,
            Ability::Cha => &self.charisma,
        }
    }

    fn slot_mut(&mut self, ability: Ability) -> &mut Option<AbilityScore> {
        match ability {
            Ability::Str => &mut self.strength,
            Ability::Dex => &mut self.dexterity,
            Ability::Con => &mut self.constitution,
            Ability::Int => &mut self.intelligence,
            Ability::Wis => &mut self.wisdom,
            Ability::Cha => &mut self.charisma,
        }
    }
}
