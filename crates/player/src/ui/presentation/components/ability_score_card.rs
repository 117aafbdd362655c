//! Ability score block: score circle, signed modifier, and +/- buttons.

use dioxus::prelude::*;

use crate::application::services::ScoreRow;
use dicebound_domain::ModifierTone;

/// CSS class for a modifier's color.
pub fn modifier_class(tone: Option<ModifierTone>) -> &'static str {
    match tone {
        Some(ModifierTone::Negative) => "modifier-text modifier-negative",
        Some(ModifierTone::NonNegative) => "modifier-text modifier-non-negative",
        None => "modifier-text modifier-unset",
    }
}

#[component]
pub fn AbilityScoreCard(
    row: ScoreRow,
    on_input: EventHandler<String>,
    on_increment: EventHandler<()>,
    on_decrement: EventHandler<()>,
) -> Element {
    let label = row.label;
    let text = row.text.clone();
    let modifier = row.modifier_text();
    let modifier_class = modifier_class(row.tone());

    rsx! {
        div {
            class: "ability-card",
            span { class: "form-label", "{label}" }
            input {
                class: "score-input",
                r#type: "text",
                inputmode: "numeric",
                maxlength: "2",
                value: "{text}",
                oninput: move |e| on_input.call(e.value()),
            }
            span { class: "{modifier_class}", "{modifier}" }
            div {
                class: "adjustment-buttons",
                button {
                    class: "adjust-button",
                    onclick: move |_| on_decrement.call(()),
                    "-"
                }
                button {
                    class: "adjust-button",
                    onclick: move |_| on_increment.call(()),
                    "+"
                }
            }
        }
    }
}
