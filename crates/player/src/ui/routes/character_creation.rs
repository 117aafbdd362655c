//! Character creation route handler

use dioxus::prelude::*;

/// Character creation route
///
/// The form state lives inside the view, so leaving this route discards the draft.
#[component]
pub fn CharacterCreationRoute() -> Element {
    rsx! {
        document::Title { "Create Character" }
        crate::presentation::views::character_creation::CharacterCreationView {}
    }
}
