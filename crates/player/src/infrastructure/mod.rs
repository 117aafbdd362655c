//! Infrastructure adapters for the player ports.

pub mod logging_sink;

pub use logging_sink::LoggingCharacterSink;
