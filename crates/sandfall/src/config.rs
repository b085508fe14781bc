//! Simulation settings, loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::seed::Initializer;
use crate::transition::ConflictPolicy;

pub const DEFAULT_WIDTH: usize = 100;
pub const DEFAULT_HEIGHT: usize = 50;
pub const DEFAULT_CELL_SIZE: u32 = 10;

/// Missing fields fall back to their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    /// Pixel edge of one cell on screen.
    pub cell_size: u32,
    /// Seeds both the chaotic fill and the tie-break stream.
    pub seed: u64,
    pub initializer: Initializer,
    pub conflict_policy: ConflictPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            seed: 0,
            initializer: Initializer::default(),
            conflict_policy: ConflictPolicy::default(),
        }
    }
}

impl SimulationConfig {
    /// # Errors
    /// `Json` on malformed input or unknown fields.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    /// `ZeroCellSize` when `cell_size` is zero. Grid dimensions are checked
    /// when the grid is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        Ok(())
    }
}
