//! Standard model: each offensive layer is one independent attempt.

use pzero_core::layers::{DefensiveLayer, OffensiveLayer, Target};

use crate::aggregate::penetration_probabilities;
use crate::registry::Model;

pub const NAME: &str = "Standard";

pub fn model() -> Model {
    Model::new(NAME, aggregate).with_description(
        "Each offensive layer makes one attempt that must survive every defensive layer. \
         P(0) is the probability that every attempt fails.",
    )
}

/// P(0) = product over configured layers of (1 - penetration probability).
pub fn aggregate(
    offensive: &[OffensiveLayer],
    defensive: &[DefensiveLayer],
    target: &Target,
) -> Option<f64> {
    let penetrations = penetration_probabilities(offensive, defensive, target)?;
    Some(
        penetrations
            .iter()
            .fold(1.0, |survival, (_, p)| survival * (1.0 - p)),
    )
}
