//! Offensive layer dispatch: picks the formula chain for a layer's kind.

use pzero_core::constants::LETHAL_RADIUS_COEFFICIENT;
use pzero_core::error::{EngineError, Result};
use pzero_core::layers::{OffensiveKind, OffensiveLayer};

use crate::formulas::{
    lethal_radius_with_coefficient, single_shot_kill_probability, terminal_kill_probability,
};

/// Shown in place of a kind for layers that never had one chosen.
const UNSET_KIND: &str = "<unset>";

/// Kill probability of one offensive layer with no defense in the way.
///
/// Fails with [`EngineError::UnknownLayerKind`] when the layer has no kind.
pub fn offensive_layer_probability(layer: &OffensiveLayer, hardness: f64) -> Result<f64> {
    let kind = layer
        .kind
        .as_ref()
        .ok_or_else(|| EngineError::UnknownLayerKind {
            layer: layer.name.clone(),
            kind: UNSET_KIND.to_string(),
        })?;
    Ok(unopposed_kill_probability(kind, layer.reliability, hardness))
}

/// Unopposed kill probability for an already-resolved kind.
pub fn unopposed_kill_probability(kind: &OffensiveKind, reliability: f64, hardness: f64) -> f64 {
    unopposed_kill_probability_with_coefficient(
        kind,
        reliability,
        hardness,
        LETHAL_RADIUS_COEFFICIENT,
    )
}

/// [`unopposed_kill_probability`] with an explicit lethal radius coefficient.
pub fn unopposed_kill_probability_with_coefficient(
    kind: &OffensiveKind,
    reliability: f64,
    hardness: f64,
    coefficient: f64,
) -> f64 {
    match *kind {
        OffensiveKind::Notional { sspk } => terminal_kill_probability(sspk, reliability),
        OffensiveKind::GroundBurst { yield_kt, cep } => {
            let radius = lethal_radius_with_coefficient(coefficient, yield_kt, hardness);
            terminal_kill_probability(single_shot_kill_probability(radius, cep), reliability)
        }
    }
}
