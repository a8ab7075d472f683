//! Optional scenario file: a level and its tuning as one JSON object.

use std::fs;
use std::path::Path;

use anyhow::Context;
use parryfall_core::config::Tuning;
use parryfall_core::level::LevelConfig;
use serde::{Deserialize, Serialize};

/// A level plus the tuning to play it with. Either half may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub level: LevelConfig,
    pub tuning: Tuning,
}

impl Scenario {
    /// Parses a scenario; missing keys keep the castle and default tuning.
    ///
    /// Values are not validated here. `Simulation::new` does that.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("malformed scenario JSON")
    }
}

/// Reads the scenario at `path`, or the default castle when `None`.
pub fn load(path: Option<&Path>) -> anyhow::Result<Scenario> {
    let Some(path) = path else {
        return Ok(Scenario::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario {}", path.display()))?;
    Scenario::from_json(&text).with_context(|| format!("in {}", path.display()))
}
