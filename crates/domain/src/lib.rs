//! Dicebound domain: ability scores, point-buy rules, and the character draft.
//!
//! Pure rules with no I/O and no logging; the player crate owns both.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod game_systems;
pub mod value_objects;

pub use aggregates::{AbilityLedger, ScoreChange};
pub use entities::{CharacterDraft, DraftField};
pub use error::{AbilityScoreError, DomainError};
pub use game_systems::{point_cost, total_cost, POINT_BUY_BUDGET};
pub use value_objects::{Ability, AbilityModifier, AbilityScore, ModifierTone, StepDirection};
