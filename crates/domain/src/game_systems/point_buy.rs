//! D&D 5th Edition point-buy rules.
//!
//! Every score starts at 8 for free; raising it costs points from a fixed
//! budget, with the last two steps (13 to 14, 14 to 15) costing two points each.

use crate::value_objects::AbilityScore;

/// Points available to spend across all six abilities.
pub const POINT_BUY_BUDGET: i32 = 27;

/// Cumulative point cost for each score.
/// Index is score - 8 (so score 8 = index 0).
const POINT_COSTS: [i32; 8] = [
    0, // 8
    1, // 9
    2, // 10
    3, // 11
    4, // 12
    5, // 13
    7, // 14
    9, // 15
];

/// Get the point cost of a score.
pub fn point_cost(score: AbilityScore) -> i32 {
    let index = usize::from(score.value() - AbilityScore::MIN);
    POINT_COSTS.get(index).copied().unwrap_or(0)
}

/// Total cost of a set of scores. Unset scores cost nothing.
pub fn total_cost<I>(scores: I) -> i32
where
    I: IntoIterator<Item = Option<AbilityScore>>,
{
    scores.into_iter().flatten().map(point_cost).sum()
}
