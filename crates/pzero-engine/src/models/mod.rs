//! Built-in aggregation models.
//!
//! Each model is a pure function with the [`AggregateFn`](crate::aggregate::AggregateFn)
//! signature plus a `model()` constructor describing it for the registry.

pub mod salvo;
pub mod sampled;
pub mod standard;

use crate::registry::Model;

/// The built-in models in presentation order. Standard comes first and is
/// the default.
pub fn builtin() -> Vec<Model> {
    vec![standard::model(), salvo::model(), sampled::model()]
}
