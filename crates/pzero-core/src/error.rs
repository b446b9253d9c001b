//! Errors raised by the engine.
//!
//! Non-finite probabilities are not errors; they flow through as IEEE values.

use thiserror::Error;

/// Errors surfaced by layer parsing, dispatch, and model selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An offensive layer declared a kind outside the known set, or none at all
    /// where one was required.
    #[error("unknown offensive layer type for '{layer}': {kind}")]
    UnknownLayerKind { layer: String, kind: String },

    #[error("model registry is empty")]
    EmptyRegistry,

    #[error("model index {index} out of range for {len} registered models")]
    ModelIndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, EngineError>;
