//! Model registry: an ordered list of named aggregation models.
//!
//! Index 0 is the default. The registry is built by the caller and passed in
//! explicitly; there is no global model table.

use std::fmt;

use pzero_core::error::{EngineError, Result};

use crate::aggregate::AggregateFn;
use crate::models;

/// A named aggregation strategy.
#[derive(Clone)]
pub struct Model {
    pub name: String,
    pub description: Option<String>,
    pub aggregate: AggregateFn,
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl Model {
    pub fn new(name: impl Into<String>, aggregate: AggregateFn) -> Self {
        Self {
            name: name.into(),
            description: None,
            aggregate,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Ordered, non-empty collection of models.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    models: Vec<Model>,
}

impl ModelRegistry {
    /// Fails with [`EngineError::EmptyRegistry`] when `models` is empty.
    pub fn new(models: Vec<Model>) -> Result<Self> {
        if models.is_empty() {
            return Err(EngineError::EmptyRegistry);
        }
        Ok(Self { models })
    }

    /// Standard, Salvo and Sampled, in that order.
    pub fn builtin() -> Self {
        Self {
            models: models::builtin(),
        }
    }

    pub fn get(&self, index: usize) -> Result<&Model> {
        self.models
            .get(index)
            .ok_or(EngineError::ModelIndexOutOfRange {
                index,
                len: self.models.len(),
            })
    }

    /// The model at index 0. `new` rejects an empty list and models are only
    /// ever appended, so the index is always present.
    pub fn default_model(&self) -> &Model {
        &self.models[0]
    }

    /// Append a model after the existing ones.
    pub fn push(&mut self, model: Model) {
        self.models.push(model);
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Never true for a constructed registry.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Whether there is more than one model to choose from.
    pub fn offers_choice(&self) -> bool {
        self.models.len() > 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &Model> {
        self.models.iter()
    }

    /// Position of the model with the given name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.models.iter().position(|m| m.name == name)
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
