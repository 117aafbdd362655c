//! Dicebound player crate.
//!
//! This crate contains the UI, the creation-form logic, and the save adapter.
//! Multi-platform support is provided via compile-time `cfg` selection.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use ui::presentation;
pub use ui::routes;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::{use_character_sink, Route, ShellKind, Sink};
