//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::geo::Units;

/// Map file used when neither `--map` nor `map_file` is given
pub const DEFAULT_MAP_FILE: &str = "map.json";

/// Default number of decimal places for printed distances and coordinates
pub const DEFAULT_PRECISION: usize = 6;

/// Navigator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Default map description file (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_file: Option<PathBuf>,

    /// Units for printed distances
    #[serde(default)]
    pub units: Units,

    /// Decimal places for printed distances and coordinates
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Print prompts in interactive mode (disable for scripted stdin)
    #[serde(default = "default_prompt")]
    pub prompt: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            map_file: None,
            units: Units::default(),
            precision: DEFAULT_PRECISION,
            prompt: true,
        }
    }
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

fn default_prompt() -> bool {
    true
}
