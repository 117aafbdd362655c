//! CharacterSink - where a finished character draft goes on save.
//!
//! Nothing is persisted yet; the shipped adapter only logs the draft
//! (see `infrastructure::logging_sink`).

use dicebound_domain::CharacterDraft;
use thiserror::Error;

/// Failure reported by a sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// The draft could not be encoded for the sink
    #[error("Failed to encode character draft: {0}")]
    Encode(String),
    /// The sink refused or could not take the draft
    #[error("Character sink unavailable: {0}")]
    Unavailable(String),
}

/// Receives finalized character drafts from the creation form.
///
/// Use via Dioxus context: `use_context::<Arc<dyn CharacterSink>>()`
#[cfg_attr(test, mockall::automock)]
pub trait CharacterSink: Send + Sync {
    fn save(&self, draft: CharacterDraft) -> Result<(), SinkError>;
}
