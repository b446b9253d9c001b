//! Salvo model: every warhead in a layer is engaged on its own.

use pzero_core::layers::{DefensiveLayer, OffensiveLayer, Target};

use crate::aggregate::penetration_probabilities;
use crate::registry::Model;

pub const NAME: &str = "Salvo";

pub fn model() -> Model {
    Model::new(NAME, aggregate).with_description(
        "Every warhead of a layer faces the full defensive stack independently, \
         so a layer of N warheads contributes N attempts.",
    )
}

/// P(0) = product over configured layers of (1 - penetration probability)^number.
///
/// A blank warhead count or an unknown penetration probability is not
/// computable, even for a layer of zero warheads.
pub fn aggregate(
    offensive: &[OffensiveLayer],
    defensive: &[DefensiveLayer],
    target: &Target,
) -> Option<f64> {
    let penetrations = penetration_probabilities(offensive, defensive, target)?;
    Some(penetrations.iter().fold(1.0, |survival, (layer, p)| {
        survival * layer_survival(*p, layer.number)
    }))
}

fn layer_survival(penetration: f64, number: Option<u32>) -> f64 {
    match number {
        Some(n) if !penetration.is_nan() => (1.0 - penetration).powf(f64::from(n)),
        _ => f64::NAN,
    }
}
