//! Sampled model: Monte Carlo estimate of the standard model.
//!
//! The RNG is reseeded on every call, so identical inputs give identical output.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use pzero_core::constants::{SAMPLED_MODEL_SEED, SAMPLED_MODEL_TRIALS};
use pzero_core::layers::{DefensiveLayer, OffensiveLayer, Target};

use crate::aggregate::penetration_probabilities;
use crate::registry::Model;

pub const NAME: &str = "Sampled";

pub fn model() -> Model {
    Model::new(NAME, aggregate).with_description(
        "Monte Carlo estimate of the standard model: each trial rolls every \
         offensive layer against the defense and counts trials the target survives.",
    )
}

pub fn aggregate(
    offensive: &[OffensiveLayer],
    defensive: &[DefensiveLayer],
    target: &Target,
) -> Option<f64> {
    let penetrations: Vec<f64> = penetration_probabilities(offensive, defensive, target)?
        .into_iter()
        .map(|(_, p)| p)
        .collect();
    Some(estimate(&penetrations, SAMPLED_MODEL_SEED, SAMPLED_MODEL_TRIALS))
}

/// Fraction of `trials` in which no layer penetrates. NaN if any probability
/// cannot be rolled.
pub fn estimate(penetrations: &[f64], seed: u64, trials: u32) -> f64 {
    if trials == 0 || penetrations.iter().any(|p| !(0.0..=1.0).contains(p)) {
        return f64::NAN;
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut survived = 0u32;
    for _ in 0..trials {
        if penetrations.iter().all(|&p| !rng.gen_bool(p)) {
            survived += 1;
        }
    }
    debug!(trials, survived, "sampled P(0)");
    f64::from(survived) / f64::from(trials)
}
