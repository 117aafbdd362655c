//! Domain entities - Core business objects

mod character_draft;

pub use character_draft::{CharacterDraft, DraftField};
