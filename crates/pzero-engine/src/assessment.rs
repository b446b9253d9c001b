//! One-call evaluation of a scenario: per-layer probabilities plus P(0).

use serde::{Serialize, Serializer};

use pzero_core::error::Result;
use pzero_core::scenario::Scenario;

use crate::aggregate::aggregate;
use crate::dispatch::unopposed_kill_probability;
use crate::formulas::defensive_layer_probability;
use crate::registry::ModelRegistry;
use crate::subset::evaluate_active;

/// Probability attached to one layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerProbability {
    pub index: usize,
    pub name: String,
    /// `None` for an offensive layer with no kind yet.
    #[serde(serialize_with = "probability")]
    pub probability: Option<f64>,
}

/// P(0) restricted to the scenario's active layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubsetAssessment {
    pub offensive: Vec<usize>,
    pub defensive: Vec<usize>,
    #[serde(serialize_with = "probability")]
    pub survival: Option<f64>,
}

/// Everything a results view needs for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub model: String,
    /// Unopposed kill probability of each offensive layer.
    pub offensive: Vec<LayerProbability>,
    /// Stop probability of each defensive layer.
    pub defensive: Vec<LayerProbability>,
    /// P(0) over every layer; `None` when no offense is configured.
    #[serde(serialize_with = "probability")]
    pub survival: Option<f64>,
    /// Present when the scenario selects any layers.
    pub subset: Option<SubsetAssessment>,
}

/// Written in place of a non-finite probability.
pub const NOT_COMPUTABLE: &str = "not computable";

/// Finite values as numbers, non-finite as [`NOT_COMPUTABLE`], absence as null.
fn probability<S>(value: &Option<f64>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(p) if p.is_finite() => serializer.serialize_f64(*p),
        Some(_) => serializer.serialize_str(NOT_COMPUTABLE),
        None => serializer.serialize_none(),
    }
}

/// Evaluate `scenario` with the model it selects from `registry`.
pub fn assess(registry: &ModelRegistry, scenario: &Scenario) -> Result<Assessment> {
    let model = registry.get(scenario.model_index)?;
    let target = &scenario.target;
    let layers = &scenario.layers;

    let offensive = layers
        .offensive
        .iter()
        .enumerate()
        .map(|(index, layer)| LayerProbability {
            index,
            name: layer.name.clone(),
            probability: layer
                .kind
                .as_ref()
                .map(|kind| unopposed_kill_probability(kind, layer.reliability, target.hardness)),
        })
        .collect();

    let defensive = layers
        .defensive
        .iter()
        .enumerate()
        .map(|(index, layer)| LayerProbability {
            index,
            name: layer.name.clone(),
            probability: Some(defensive_layer_probability(layer)),
        })
        .collect();

    let survival = aggregate(model, &layers.offensive, &layers.defensive, target);

    let subset = (!scenario.active.is_empty()).then(|| SubsetAssessment {
        offensive: scenario.active.offensive.iter().copied().collect(),
        defensive: scenario.active.defensive.iter().copied().collect(),
        survival: evaluate_active(
            model,
            &layers.offensive,
            &layers.defensive,
            &scenario.active,
            target,
        ),
    });

    Ok(Assessment {
        model: model.name.clone(),
        offensive,
        defensive,
        survival,
        subset,
    })
}
