//! Character list route handler

use dioxus::prelude::*;

/// Home screen route
#[component]
pub fn CharacterListRoute() -> Element {
    rsx! {
        document::Title { "Characters" }
        crate::presentation::views::character_list::CharacterListView {}
    }
}
