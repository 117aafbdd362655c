//! Application layer - form state and use cases, free of UI types.

pub mod services;
