//! Application services used by the presentation layer.

pub mod creation_form_service;

pub use creation_form_service::{
    CreationForm, FormEvent, PointsSummary, SaveError, ScoreRow,
};
