//! Core types and definitions for the P(0) survivability engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! target and layer records, the wire format they parse from, scenario
//! snapshots, errors, and constants. It has no engine logic.

pub mod constants;
pub mod error;
pub mod layers;
pub mod scenario;
pub mod wire;

pub use error::{EngineError, Result};
pub use layers::{DefensiveLayer, OffensiveKind, OffensiveLayer, RawOffensiveLayer, Target};
pub use scenario::{ActiveLayers, LayerSet, Scenario};
