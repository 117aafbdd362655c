//! Character sink that writes the saved draft to the log.

use dicebound_domain::CharacterDraft;

use crate::ports::outbound::{CharacterSink, SinkError};

/// Logs each saved draft as JSON at `info` level. Keeps nothing.
#[derive(Debug, Clone, Default)]
pub struct LoggingCharacterSink;

impl LoggingCharacterSink {
    pub fn new() -> Self {
        Self
    }

    fn encode(draft: &CharacterDraft) -> Result<String, SinkError> {
        serde_json::to_string(draft).map_err(|e| SinkError::Encode(e.to_string()))
    }
}

impl CharacterSink for LoggingCharacterSink {
    fn save(&self, draft: CharacterDraft) -> Result<(), SinkError> {
        let payload = Self::encode(&draft)?;
        tracing::info!(
            name = %draft.name,
            points_spent = draft.abilities().total_spent(),
            %payload,
            "Saving character"
        );
        Ok(())
    }
}
