//! Scenario snapshot: everything the engine needs for one evaluation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::layers::{DefensiveLayer, OffensiveLayer, Target};
use crate::wire;

/// Offensive and defensive layer stacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerSet {
    #[serde(default)]
    pub offensive: Vec<OffensiveLayer>,
    #[serde(default)]
    pub defensive: Vec<DefensiveLayer>,
}

/// Indices of the layers currently selected for a what-if evaluation.
///
/// Indices refer to positions in the matching [`LayerSet`] list and must be
/// recomputed by the caller whenever a list is reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveLayers {
    #[serde(default)]
    pub offensive: BTreeSet<usize>,
    #[serde(default)]
    pub defensive: BTreeSet<usize>,
}

impl ActiveLayers {
    pub fn new(
        offensive: impl IntoIterator<Item = usize>,
        defensive: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            offensive: offensive.into_iter().collect(),
            defensive: defensive.into_iter().collect(),
        }
    }

    /// One index set applied to both stacks.
    pub fn uniform(indices: impl IntoIterator<Item = usize>) -> Self {
        let offensive: BTreeSet<usize> = indices.into_iter().collect();
        Self {
            defensive: offensive.clone(),
            offensive,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.offensive.is_empty() && self.defensive.is_empty()
    }
}

/// A complete, shareable evaluation input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Index into the model registry.
    #[serde(default, deserialize_with = "wire::index")]
    pub model_index: usize,
    #[serde(default)]
    pub target: Target,
    #[serde(default)]
    pub layers: LayerSet,
    #[serde(default)]
    pub active: ActiveLayers,
}
