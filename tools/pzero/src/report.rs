//! Plain-text rendering of an assessment.

use std::fmt;

use pzero_engine::assessment::NOT_COMPUTABLE;
use pzero_engine::Assessment;

const NO_OFFENSE: &str = "no offense configured";

/// A probability rounded for display, or a marker when it cannot be shown.
pub fn probability(value: Option<f64>) -> String {
    match value {
        Some(p) if p.is_finite() => format!("{p:.4}"),
        Some(_) => NOT_COMPUTABLE.to_string(),
        None => NO_OFFENSE.to_string(),
    }
}

pub fn meters(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1} m")
    } else {
        NOT_COMPUTABLE.to_string()
    }
}

/// Text report of one assessment.
pub struct Report<'a>(pub &'a Assessment);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assessment = self.0;
        writeln!(f, "Model: {}", assessment.model)?;

        if !assessment.offensive.is_empty() {
            writeln!(f, "Offensive layers:")?;
        }
        for layer in &assessment.offensive {
            let value = match layer.probability {
                Some(_) => probability(layer.probability),
                None => "type not set".to_string(),
            };
            writeln!(f, "  [{}] P({}, unopposed): {value}", layer.index, layer.name)?;
        }

        if !assessment.defensive.is_empty() {
            writeln!(f, "Defensive layers:")?;
        }
        for layer in &assessment.defensive {
            writeln!(
                f,
                "  [{}] P({}): {}",
                layer.index,
                layer.name,
                probability(layer.probability)
            )?;
        }

        writeln!(f, "P(0): {}", probability(assessment.survival))?;

        if let Some(subset) = &assessment.subset {
            writeln!(
                f,
                "P(0) with offensive {:?} and defensive {:?} active: {}",
                subset.offensive,
                subset.defensive,
                probability(subset.survival)
            )?;
        }
        Ok(())
    }
}
