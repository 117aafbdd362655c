//! Character draft - the in-progress record behind the creation form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::aggregates::{AbilityLedger, ScoreChange};
use crate::error::DomainError;
use crate::value_objects::{Ability, StepDirection};

/// Every field on the creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    ClassLevel,
    Background,
    PlayerName,
    Race,
    Alignment,
    ExperiencePoints,
    Ability(Ability),
}

impl DraftField {
    /// Free-text fields in form order.
    pub const TEXT_FIELDS: [DraftField; 7] = [
        Self::Name,
        Self::ClassLevel,
        Self::Background,
        Self::PlayerName,
        Self::Race,
        Self::Alignment,
        Self::ExperiencePoints,
    ];

    /// Form key, e.g. "class_level" or "strength".
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::ClassLevel => "class_level",
            Self::Background => "background",
            Self::PlayerName => "player_name",
            Self::Race => "race",
            Self::Alignment => "alignment",
            Self::ExperiencePoints => "experience_points",
            Self::Ability(ability) => ability.field_key(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Character Name",
            Self::ClassLevel => "Class & Level",
            Self::Background => "Background",
            Self::PlayerName => "Player Name",
            Self::Race => "Race",
            Self::Alignment => "Alignment",
            Self::ExperiencePoints => "XP",
            Self::Ability(ability) => ability.display_name(),
        }
    }

    /// Example input shown in the empty text box.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "e.g. Tharion",
            Self::ClassLevel => "e.g. Fighter 3",
            Self::Background => "e.g. Noble",
            Self::PlayerName => "Your name",
            Self::Race => "e.g. Elf",
            Self::Alignment => "e.g. Lawful Good",
            Self::ExperiencePoints => "e.g. 1200",
            Self::Ability(_) => "8",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DraftField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "class_level" => Ok(Self::ClassLevel),
            "background" => Ok(Self::Background),
            "player_name" => Ok(Self::PlayerName),
            "race" => Ok(Self::Race),
            "alignment" => Ok(Self::Alignment),
            "experience_points" => Ok(Self::ExperiencePoints),
            other => Ability::from_str(other)
                .map(Self::Ability)
                .map_err(|_| DomainError::parse(format!("Unknown draft field: {}", s))),
        }
    }
}

/// A character being filled in on the creation screen.
///
/// Text fields take any input. Ability scores go through the
/// [`AbilityLedger`], which refuses anything outside 8-15.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDraft {
    pub name: String,
    pub class_level: String,
    pub background: String,
    pub player_name: String,
    pub race: String,
    pub alignment: String,
    /// Kept as entered; not validated
    pub experience_points: String,
    abilities: AbilityLedger,
}

impl CharacterDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abilities(&self) -> &AbilityLedger {
        &self.abilities
    }

    /// Current text of a field as the form should show it.
    ///
    /// Unset ability scores read as an empty string.
    pub fn field_text(&self, field: DraftField) -> String {
        match field {
            DraftField::Ability(ability) => self
                .abilities
                .score(ability)
                .map(|score| score.to_string())
                .unwrap_or_default(),
            text => self.text_slot(text).cloned().unwrap_or_default(),
        }
    }

    /// Apply one form edit, reporting a refused ability score.
    pub fn try_apply(&mut self, field: DraftField, raw: &str) -> Result<(), DomainError> {
        match field {
            DraftField::Ability(ability) => {
                self.abilities.try_set_score(ability, raw)?;
            }
            text => {
                if let Some(slot) = self.text_slot_mut(text) {
                    *slot = raw.to_string();
                }
            }
        }
        Ok(())
    }

    /// Apply one form edit. A refused ability score leaves the draft unchanged.
    pub fn apply(&mut self, field: DraftField, raw: &str) {
        let _ = self.try_apply(field, raw);
    }

    pub fn step(&mut self, ability: Ability, direction: StepDirection) -> ScoreChange {
        self.abilities.step(ability, direction)
    }

    pub fn is_valid(&self) -> bool {
        self.abilities.is_valid()
    }

    fn text_slot(&self, field: DraftField) -> Option<&String> {
        match field {
            DraftField::Name => Some(&self.name),
            DraftField::ClassLevel => Some(&self.class_level),
            DraftField::Background => Some(&self.background),
            DraftField::PlayerName => Some(&self.player_name),
            DraftField::Race => Some(&self.race),
            DraftField::Alignment => Some(&self.alignment),
            DraftField::ExperiencePoints => Some(&self.experience_points),
            DraftField::Ability(_) => None,
        }
    }

    fn text_slot_mut(&mut self, field: DraftField) -> Option<&mut String> {
        match field {
            DraftField::Name => Some(&mut self.name),
            DraftField::ClassLevel => Some(&mut self.class_level),
            DraftField::Background => Some(&mut self.background),
            DraftField::PlayerName => Some(&mut self.player_name),
            DraftField::Race => Some(&mut self.race),
            DraftField::Alignment => Some(&mut self.alignment),
            DraftField::ExperiencePoints => Some(&mut self.experience_points),
            DraftField::Ability(_) => None,
        }
    }
}
