//! Character creation screen - identity fields, point-buy abilities, save.

use dioxus::prelude::*;

use crate::application::services::{CreationForm, FormEvent};
use crate::presentation::components::common::TextField;
use crate::presentation::components::{AbilityScoreCard, PointsBanner};
use crate::routes::Route;
use crate::use_character_sink;
use dicebound_domain::DraftField;

/// Text fields laid out two per row, as on a paper sheet.
const TEXT_ROWS: [[DraftField; 2]; 3] = [
    [DraftField::ClassLevel, DraftField::Background],
    [DraftField::PlayerName, DraftField::Race],
    [DraftField::Alignment, DraftField::ExperiencePoints],
];

#[component]
pub fn CharacterCreationView() -> Element {
    let sink = use_character_sink();

    // A fresh draft every time the screen opens
    let mut form = use_signal(CreationForm::new);
    let mut status: Signal<Option<String>> = use_signal(|| None);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);
    // Bumped on every refused edit. The score cards are keyed on it, so they
    // remount and the input shows the retained value instead of the typed one.
    let mut refusals = use_signal(|| 0u32);

    let mut dispatch = move |event: FormEvent| {
        if form.write().handle(event).is_err() {
            refusals += 1;
        }
        status.set(None);
        error_message.set(None);
    };

    let name = form.read().text(DraftField::Name);
    let rows = form.read().score_rows();
    let summary = form.read().points_summary();
    let can_save = form.read().can_save();

    let on_save = move |_| {
        match form.read().save(sink.as_ref()) {
            Ok(()) => status.set(Some("Character saved.".to_string())),
            Err(e) => {
                tracing::warn!(error = %e, "Character save refused");
                error_message.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        div {
            class: "screen",

            Link { to: Route::CharacterListRoute {}, class: "back-link", "< Characters" }

            h1 { class: "screen-title", "Character Creation" }

            TextField {
                label: DraftField::Name.label().to_string(),
                value: name,
                placeholder: DraftField::Name.placeholder().to_string(),
                on_input: move |value| dispatch(FormEvent::Edit { field: DraftField::Name, value }),
            }

            for pair in TEXT_ROWS {
                div {
                    class: "form-row",
                    for field in pair {
                        TextField {
                            key: "{field}",
                            label: field.label().to_string(),
                            value: form.read().text(field),
                            placeholder: field.placeholder().to_string(),
                            numeric: field == DraftField::ExperiencePoints,
                            on_input: move |value| dispatch(FormEvent::Edit { field, value }),
                        }
                    }
                }
            }

            h2 { class: "screen-title", "Abilities" }

            div {
                class: "ability-grid",
                for (ability, row) in rows.into_iter().map(|row| (row.ability, row)) {
                    AbilityScoreCard {
                        key: "{ability}-{refusals}",
                        row,
                        on_input: move |value| dispatch(FormEvent::Edit {
                            field: DraftField::Ability(ability),
                            value,
                        }),
                        on_increment: move |_| dispatch(FormEvent::Increment(ability)),
                        on_decrement: move |_| dispatch(FormEvent::Decrement(ability)),
                    }
                }
            }

            PointsBanner { summary }

            button {
                class: "save-button",
                disabled: !can_save,
                onclick: on_save,
                "Save"
            }

            if let Some(msg) = status.read().as_ref() {
                p { class: "status-message points-ok", "{msg}" }
            }
            if let Some(msg) = error_message.read().as_ref() {
                p { class: "status-message points-over", "{msg}" }
            }
        }
    }
}
