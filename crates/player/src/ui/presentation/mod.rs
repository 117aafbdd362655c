//! Presentation layer - Dioxus UI components and views

pub mod components;
pub mod views;
