//! Reusable UI components.

pub mod ability_score_card;
pub mod common;
pub mod points_banner;

pub use ability_score_card::AbilityScoreCard;
pub use points_banner::PointsBanner;
