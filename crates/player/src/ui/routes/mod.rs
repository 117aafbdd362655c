//! Router definition - one route per screen.

use dioxus::prelude::*;

mod character_creation;
mod character_list;

pub use character_creation::CharacterCreationRoute;
pub use character_list::CharacterListRoute;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    CharacterListRoute {},
    #[route("/create")]
    CharacterCreationRoute {},
}
