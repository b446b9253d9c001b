//! Active-subset evaluation: P(0) with only the selected layers in play.
//!
//! Goes through [`aggregate`] like the full-stack computation does; only the
//! layer lists differ.

use std::collections::BTreeSet;

use pzero_core::layers::{DefensiveLayer, OffensiveLayer, Target};
use pzero_core::scenario::ActiveLayers;

use crate::aggregate::aggregate;
use crate::registry::Model;

/// P(0) under `model` counting only the layers whose indices are active.
///
/// Indices past the end of a list are ignored.
pub fn evaluate_active(
    model: &Model,
    offensive: &[OffensiveLayer],
    defensive: &[DefensiveLayer],
    active: &ActiveLayers,
    target: &Target,
) -> Option<f64> {
    let offensive = select(offensive, &active.offensive);
    let defensive = select(defensive, &active.defensive);
    aggregate(model, &offensive, &defensive, target)
}

/// Bind the model, layers and target once and hand back a function of the
/// active set, for callers that re-query on every hover or selection change.
pub fn subset_evaluator<'a>(
    model: &'a Model,
    offensive: &'a [OffensiveLayer],
    defensive: &'a [DefensiveLayer],
    target: Target,
) -> impl Fn(&ActiveLayers) -> Option<f64> + 'a {
    move |active: &ActiveLayers| evaluate_active(model, offensive, defensive, active, &target)
}

fn select<T: Clone>(layers: &[T], indices: &BTreeSet<usize>) -> Vec<T> {
    layers
        .iter()
        .enumerate()
        .filter(|(i, _)| indices.contains(i))
        .map(|(_, layer)| layer.clone())
        .collect()
}
