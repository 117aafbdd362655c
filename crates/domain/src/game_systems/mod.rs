//! Game system rules.
//!
//! # Supported Systems
//!
//! - D&D 5th Edition point-buy character creation (`point_buy`)

pub mod point_buy;

pub use point_buy::{point_cost, total_cost, POINT_BUY_BUDGET};
