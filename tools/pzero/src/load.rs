//! Scenario file loading. `.toml` files parse as TOML, everything else as JSON.

use std::fs;
use std::path::Path;

use pzero_core::Scenario;
use tracing::debug;

use crate::error::{CliError, Result};

pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let scenario: Scenario = if is_toml {
        toml::from_str(&text)?
    } else {
        serde_json::from_str(&text)?
    };

    debug!(
        path = %path.display(),
        offensive = scenario.layers.offensive.len(),
        defensive = scenario.layers.defensive.len(),
        "loaded scenario"
    );
    Ok(scenario)
}
