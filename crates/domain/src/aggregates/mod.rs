//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns an outcome from mutations instead of raising errors for refused input
//!
//! # Rustic DDD Principles
//!
//! | Java DDD Pattern | Rustic Equivalent |
//! |------------------|-------------------|
//! | Private fields + getters | Newtypes valid by construction |
//! | Aggregate root guards | Ownership (borrow checker enforces) |
//! | Value Object immutability | `#[derive(Clone, Copy)]` + no `&mut` methods |
//! | Domain Events | Return enums from mutations |

pub mod ability_ledger;

pub use ability_ledger::{AbilityLedger, ScoreChange};
