//! Per-layer formulas.
//!
//! All functions are total over `f64`: out-of-range inputs produce NaN or
//! infinities, which callers treat as "not computable".

use pzero_core::constants::*;
use pzero_core::layers::DefensiveLayer;

/// Lethal radius in meters of a `yield_kt` surface burst against a target of
/// the given hardness (psi).
pub fn lethal_radius(yield_kt: f64, hardness: f64) -> f64 {
    lethal_radius_with_coefficient(LETHAL_RADIUS_COEFFICIENT, yield_kt, hardness)
}

/// [`lethal_radius`] with an explicit coefficient (nautical miles at 1 Mt, 1 psi).
pub fn lethal_radius_with_coefficient(coefficient: f64, yield_kt: f64, hardness: f64) -> f64 {
    coefficient * METERS_PER_NAUTICAL_MILE * (yield_kt / KILOTONS_PER_MEGATON).cbrt()
        / hardness.cbrt()
}

/// Probability a single warhead lands within `lethal_radius` given its CEP.
///
/// A CEP of zero gives exactly 1.
pub fn single_shot_kill_probability(lethal_radius: f64, cep: f64) -> f64 {
    1.0 - CEP_CONTAINMENT.powf((lethal_radius / cep).powi(2))
}

/// SSPK derated by hardware reliability.
pub fn terminal_kill_probability(sspk: f64, reliability: f64) -> f64 {
    sspk * reliability
}

/// Probability a defensive layer stops one attacker.
///
/// Zero interceptors stop nothing; the limit for many interceptors is the
/// tracking probability.
pub fn defensive_layer_probability(layer: &DefensiveLayer) -> f64 {
    let leak = (1.0 - layer.sspk).powf(f64::from(layer.interceptors));
    layer.tracking * (1.0 - leak)
}
