//! Host settings read from `PARRYFALL_*` environment variables.
//!
//! Unset variables take their defaults. A variable that is set but does not
//! parse is logged and also falls back to the default.

use std::env;
use std::path::PathBuf;

use tracing::warn;

use crate::script::ScriptKind;

// Runtime knobs for the host loop (not gameplay tuning).

pub const DEFAULT_FRAMES: u64 = 3600;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_DISPLAY_HZ: f32 = 60.0;

/// Host settings read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// JSON scenario file; the castle with default tuning when unset.
    pub scenario: Option<PathBuf>,
    /// Display frames to emulate.
    pub frames: u64,
    /// Seed for the random input script.
    pub seed: u64,
    /// Input source.
    pub script: ScriptKind,
    /// Emulated display refresh rate.
    pub display_hz: f32,
}

impl Settings {
    /// Reads every setting from the process environment.
    pub fn from_env() -> Self {
        Self {
            scenario: env::var_os("PARRYFALL_SCENARIO").map(PathBuf::from),
            frames: parsed("PARRYFALL_FRAMES").unwrap_or(DEFAULT_FRAMES),
            seed: parsed("PARRYFALL_SEED").unwrap_or(DEFAULT_SEED),
            script: parsed("PARRYFALL_SCRIPT").unwrap_or_default(),
            display_hz: parsed("PARRYFALL_DISPLAY_HZ")
                .filter(|hz: &f32| hz.is_finite() && *hz > 0.0)
                .unwrap_or(DEFAULT_DISPLAY_HZ),
        }
    }
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    let value = env::var(key).ok()?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(key, %value, "ignoring unparseable setting");
            None
        }
    }
}
