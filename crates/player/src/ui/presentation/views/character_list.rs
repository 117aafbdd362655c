//! Character list screen.
//!
//! Saved characters are not stored yet, so this always shows the empty state.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn CharacterListView() -> Element {
    let navigator = use_navigator();

    rsx! {
        div {
            class: "screen",
            h1 { class: "screen-title", "D&D Characters" }

            div {
                class: "list-container",
                p { class: "placeholder-text", "No characters yet." }
            }

            button {
                class: "fab",
                title: "Create character",
                onclick: move |_| {
                    tracing::debug!("Opening character creation");
                    navigator.push(Route::CharacterCreationRoute {});
                },
                "+"
            }
        }
    }
}
