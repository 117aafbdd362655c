//! Creation Form Service - state and derived values behind the character creation screen
//!
//! Holds the [`CharacterDraft`] for as long as the screen is open and turns it
//! into what the view renders: per-ability rows, the points banner, and whether
//! save is enabled. Contains no Dioxus types so it can be tested directly.

use thiserror::Error;

use dicebound_domain::{
    Ability, AbilityModifier, CharacterDraft, DomainError, DraftField, ModifierTone,
    ScoreChange, StepDirection,
};

use crate::ports::outbound::{CharacterSink, SinkError};

/// A single user action on the creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Text typed into a field
    Edit { field: DraftField, value: String },
    /// "+" pressed under an ability
    Increment(Ability),
    /// "-" pressed under an ability
    Decrement(Ability),
}

/// Display data for one ability block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRow {
    pub ability: Ability,
    pub label: &'static str,
    /// Score text, empty while unset
    pub text: String,
    pub modifier: Option<AbilityModifier>,
}

impl ScoreRow {
    /// Signed modifier, or an empty string while the score is unset.
    pub fn modifier_text(&self) -> String {
        self.modifier.map(|m| m.to_string()).unwrap_or_default()
    }

    pub fn tone(&self) -> Option<ModifierTone> {
        self.modifier.map(AbilityModifier::tone)
    }
}

/// The points banner under the ability grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsSummary {
    pub spent: i32,
    pub remaining: i32,
}

impl PointsSummary {
    pub fn is_valid(&self) -> bool {
        self.remaining >= 0
    }

    pub fn message(&self) -> String {
        if self.is_valid() {
            format!("Points remaining: {}", self.remaining)
        } else {
            format!("Over budget by {} points!", self.remaining.abs())
        }
    }
}

/// Why a save did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("Ability scores are over the point-buy budget by {over_by} points")]
    OverBudget { over_by: i32 },
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Creation form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationForm {
    draft: CharacterDraft,
}

impl CreationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &CharacterDraft {
        &self.draft
    }

    /// Apply a user action.
    ///
    /// Refused ability input is dropped: the field keeps its previous value and
    /// the error is returned so the view can put that value back on screen.
    pub fn handle(&mut self, event: FormEvent) -> Result<(), DomainError> {
        match event {
            FormEvent::Edit { field, value } => {
                self.draft.try_apply(field, &value).inspect_err(|e| {
                    tracing::debug!(field = %field, value = %value, error = %e, "Ignored form input");
                })
            }
            FormEvent::Increment(ability) => {
                self.step(ability, StepDirection::Increment);
                Ok(())
            }
            FormEvent::Decrement(ability) => {
                self.step(ability, StepDirection::Decrement);
                Ok(())
            }
        }
    }

    fn step(&mut self, ability: Ability, direction: StepDirection) {
        if let ScoreChange::Set(score) = self.draft.step(ability, direction) {
            tracing::trace!(ability = %ability, score = score.value(), "Ability stepped");
        }
    }

    /// Current text for a form field.
    pub fn text(&self, field: DraftField) -> String {
        self.draft.field_text(field)
    }

    /// One row per ability in sheet order.
    pub fn score_rows(&self) -> Vec<ScoreRow> {
        let abilities = self.draft.abilities();
        Ability::ALL
            .iter()
            .map(|&ability| ScoreRow {
                ability,
                label: ability.display_name(),
                text: self.text(DraftField::Ability(ability)),
                modifier: abilities.modifier(ability),
            })
            .collect()
    }

    pub fn points_summary(&self) -> PointsSummary {
        let abilities = self.draft.abilities();
        PointsSummary {
            spent: abilities.total_spent(),
            remaining: abilities.remaining(),
        }
    }

    pub fn can_save(&self) -> bool {
        self.draft.is_valid()
    }

    /// Hand the draft to `sink`. Refused while over budget.
    pub fn save(&self, sink: &dyn CharacterSink) -> Result<(), SaveError> {
        let summary = self.points_summary();
        if !summary.is_valid() {
            return Err(SaveError::OverBudget {
                over_by: -summary.remaining,
            });
        }
        sink.save(self.draft.clone())?;
        tracing::info!(spent = summary.spent, "Character draft saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockCharacterSink;

    fn edit(field: DraftField, value: &str) -> FormEvent {
        FormEvent::Edit {
            field,
            value: value.to_string(),
        }
    }

    fn form_with_scores(values: [&str; 6]) -> CreationForm {
        let mut form = CreationForm::new();
        for (ability, value) in Ability::ALL.into_iter().zip(values) {
            let _ = form.handle(edit(DraftField::Ability(ability), value));
        }
        form
    }

    #[test]
    fn new_form_shows_base_scores() {
        let form = CreationForm::new();
        let rows = form.score_rows();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].label, "Strength");
        assert_eq!(rows[5].label, "Charisma");
        for row in &rows {
            assert_eq!(row.text, "8");
            assert_eq!(row.modifier_text(), "-1");
            assert_eq!(row.tone(), Some(ModifierTone::Negative));
        }
        assert_eq!(form.points_summary().message(), "Points remaining: 27");
        assert!(form.can_save());
    }

    #[test]
    fn text_edits_are_stored_verbatim() {
        let mut form = CreationForm::new();
        let _ = form.handle(edit(DraftField::Race, "Half-Elf"));
        let _ = form.handle(edit(DraftField::ExperiencePoints, "1200"));
        assert_eq!(form.text(DraftField::Race), "Half-Elf");
        assert_eq!(form.draft().experience_points, "1200");
    }

    #[test]
    fn rejected_score_edit_keeps_value() {
        let mut form = CreationForm::new();
        assert_eq!(form.handle(edit(DraftField::Ability(Ability::Dex), "13")), Ok(()));
        assert!(form.handle(edit(DraftField::Ability(Ability::Dex), "16")).is_err());
        assert!(form.handle(edit(DraftField::Ability(Ability::Dex), "x")).is_err());
        assert!(form.handle(edit(DraftField::Ability(Ability::Dex), "  ")).is_err());
        assert_eq!(form.text(DraftField::Ability(Ability::Dex)), "13");

        let row = &form.score_rows()[1];
        assert_eq!(row.text, "13");
        assert_eq!(row.modifier_text(), "+1");
        assert_eq!(form.points_summary().spent, 5);
    }

    #[test]
    fn text_edits_and_steps_are_never_refused() {
        let mut form = CreationForm::new();
        assert_eq!(form.handle(edit(DraftField::Alignment, "  ")), Ok(()));
        assert_eq!(form.handle(FormEvent::Decrement(Ability::Cha)), Ok(()));
        assert_eq!(form.handle(FormEvent::Increment(Ability::Cha)), Ok(()));
    }

    #[test]
    fn cleared_score_has_no_modifier() {
        let mut form = CreationForm::new();
        let _ = form.handle(edit(DraftField::Ability(Ability::Int), ""));
        let row = &form.score_rows()[3];
        assert_eq!(row.ability, Ability::Int);
        assert_eq!(row.text, "");
        assert_eq!(row.modifier_text(), "");
        assert_eq!(row.tone(), None);
    }

    #[test]
    fn buttons_step_within_bounds() {
        let mut form = CreationForm::new();
        let _ = form.handle(FormEvent::Decrement(Ability::Wis));
        assert_eq!(form.text(DraftField::Ability(Ability::Wis)), "8");

        for _ in 0..10 {
            let _ = form.handle(FormEvent::Increment(Ability::Wis));
        }
        assert_eq!(form.text(DraftField::Ability(Ability::Wis)), "15");
        assert_eq!(form.score_rows()[4].modifier_text(), "+2");
        assert_eq!(form.points_summary().spent, 9);
    }

    #[test]
    fn over_budget_message_and_save_disabled() {
        let form = form_with_scores(["15"; 6]);
        let summary = form.points_summary();
        assert_eq!(summary.spent, 54);
        assert_eq!(summary.remaining, -27);
        assert_eq!(summary.message(), "Over budget by 27 points!");
        assert!(!form.can_save());
    }

    #[test]
    fn exact_budget_is_savable() {
        let form = form_with_scores(["15", "14", "13", "12", "10", "8"]);
        assert_eq!(form.points_summary().message(), "Points remaining: 0");
        assert!(form.can_save());
    }

    #[test]
    fn save_hands_draft_to_sink() {
        let mut form = form_with_scores(["15", "15", "8", "8", "8", "8"]);
        let _ = form.handle(edit(DraftField::Name, "Tharion"));

        let mut sink = MockCharacterSink::new();
        sink.expect_save()
            .times(1)
            .withf(|draft| draft.name == "Tharion" && draft.abilities().remaining() == 9)
            .returning(|_| Ok(()));

        assert_eq!(form.save(&sink), Ok(()));
    }

    #[test]
    fn save_over_budget_never_reaches_sink() {
        // 9 + 9 + 9 + 1 = 28 points
        let form = form_with_scores(["15", "15", "15", "9", "8", "8"]);

        let mut sink = MockCharacterSink::new();
        sink.expect_save().never();

        assert_eq!(form.save(&sink), Err(SaveError::OverBudget { over_by: 1 }));
    }

    #[test]
    fn sink_failure_is_reported() {
        let form = CreationForm::new();

        let mut sink = MockCharacterSink::new();
        sink.expect_save()
            .times(1)
            .returning(|_| Err(SinkError::Unavailable("offline".to_string())));

        assert_eq!(
            form.save(&sink),
            Err(SaveError::Sink(SinkError::Unavailable("offline".to_string())))
        );
    }
}
