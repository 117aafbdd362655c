//! Value objects - Immutable objects defined by their attributes

mod ability;
mod ability_score;

pub use ability::Ability;
pub use ability_score::{AbilityModifier, AbilityScore, ModifierTone, StepDirection};
