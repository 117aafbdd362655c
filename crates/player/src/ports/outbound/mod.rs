//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod character_sink_port;

pub use character_sink_port::{CharacterSink, SinkError};

#[cfg(test)]
pub use character_sink_port::MockCharacterSink;
