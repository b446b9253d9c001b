//! Probability-of-kill composition engine.
//!
//! Turns offensive and defensive layer stacks into P(0), the probability the
//! target survives. Every function is pure: no state is kept between calls.

pub mod aggregate;
pub mod assessment;
pub mod dispatch;
pub mod formulas;
pub mod models;
pub mod registry;
pub mod subset;

pub use pzero_core as core;

pub use aggregate::aggregate;
pub use assessment::{assess, Assessment};
pub use dispatch::offensive_layer_probability;
pub use formulas::{defensive_layer_probability, lethal_radius};
pub use registry::{Model, ModelRegistry};
pub use subset::{evaluate_active, subset_evaluator};

#[cfg(test)]
mod tests;
