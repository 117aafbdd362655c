//! Full-screen views rendered by the routes.

pub mod character_creation;
pub mod character_list;
