//! Aggregation: folds defensive layers into a penetration factor and runs a
//! model over the offensive stack.
//!
//! Models share the helpers here so each one only decides how per-layer
//! penetration probabilities combine into P(0).

use tracing::{debug, trace, warn};

use pzero_core::layers::{DefensiveLayer, OffensiveLayer, Target};

use crate::dispatch::unopposed_kill_probability;
use crate::formulas::defensive_layer_probability;
use crate::registry::Model;

/// Signature every model's aggregation function has.
///
/// Returns `None` when no offensive layer is configured.
pub type AggregateFn = fn(&[OffensiveLayer], &[DefensiveLayer], &Target) -> Option<f64>;

/// Run `model` over the given layers. The single entry point for full-stack
/// and active-subset evaluation alike.
pub fn aggregate(
    model: &Model,
    offensive: &[OffensiveLayer],
    defensive: &[DefensiveLayer],
    target: &Target,
) -> Option<f64> {
    debug!(
        model = %model.name,
        offensive = offensive.len(),
        defensive = defensive.len(),
        hardness = target.hardness,
        "aggregating"
    );
    let p0 = (model.aggregate)(offensive, defensive, target);
    match p0 {
        Some(p) if !p.is_finite() => warn!(model = %model.name, "P(0) is not computable"),
        None => debug!(model = %model.name, "no offensive layer configured"),
        _ => {}
    }
    p0
}

/// Probability each defensive layer fails to stop an attacker, one per layer.
pub fn defensive_factors(defensive: &[DefensiveLayer]) -> Vec<f64> {
    defensive
        .iter()
        .map(|layer| 1.0 - defensive_layer_probability(layer))
        .collect()
}

/// Probability a layer with the given unopposed kill probability gets
/// through every defensive layer and kills.
pub fn penetration_probability(unopposed: f64, factors: &[f64]) -> f64 {
    factors.iter().fold(unopposed, |p, factor| p * factor)
}

/// Penetration probability of every configured offensive layer, in list order.
///
/// `None` when no layer has a kind.
pub fn penetration_probabilities<'a>(
    offensive: &'a [OffensiveLayer],
    defensive: &[DefensiveLayer],
    target: &Target,
) -> Option<Vec<(&'a OffensiveLayer, f64)>> {
    let factors = defensive_factors(defensive);

    let penetrations: Vec<(&OffensiveLayer, f64)> = offensive
        .iter()
        .filter_map(|layer| {
            let kind = layer.kind.as_ref()?;
            let unopposed = unopposed_kill_probability(kind, layer.reliability, target.hardness);
            let p = penetration_probability(unopposed, &factors);
            trace!(layer = %layer.name, kind = kind.tag(), unopposed, penetrates = p);
            Some((layer, p))
        })
        .collect();

    if penetrations.is_empty() {
        None
    } else {
        Some(penetrations)
    }
}
