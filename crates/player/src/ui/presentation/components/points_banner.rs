//! Remaining-points banner under the ability grid.

use dioxus::prelude::*;

use crate::application::services::PointsSummary;

#[component]
pub fn PointsBanner(summary: PointsSummary) -> Element {
    let class = if summary.is_valid() {
        "points-label points-ok"
    } else {
        "points-label points-over"
    };
    let message = summary.message();

    rsx! {
        p { class: "{class}", "{message}" }
    }
}
