//! Probabilistic falling-sand cellular automaton.
//!
//! Cells are either occupied or empty. Each tick every occupied cell tries to
//! fall straight down, then diagonally down, picking a side at random when
//! both diagonals are free. See [`transition`] for the exact rule.

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod neighborhood;
pub mod render;
pub mod rng;
pub mod seed;
pub mod simulation;
pub mod transition;

pub use cell::Cell;
pub use config::SimulationConfig;
pub use error::{ConfigError, GridError};
pub use grid::Grid;
pub use seed::Initializer;
pub use simulation::Simulation;
pub use transition::{step, ConflictPolicy, StepStats, Transition};

use wasm_bindgen::prelude::*;

/// JS-facing handle: the browser render loop calls `tick()` then reads the
/// settled buffer through `cells_ptr()` (one byte per cell, row-major).
#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    sim: Simulation,
    cell_size: u32,
}

impl Universe {
    /// # Errors
    /// Whatever [`Simulation::from_config`] rejects.
    pub fn build(config: &SimulationConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            sim: Simulation::from_config(config)?,
            cell_size: config.cell_size,
        })
    }

    #[must_use]
    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }
}

#[wasm_bindgen]
impl Universe {
    /// # Errors
    /// Zero dimensions or an unknown initializer name.
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize, seed: u64, initializer: &str) -> Result<Universe, JsError> {
        let config = SimulationConfig {
            width,
            height,
            seed,
            initializer: initializer.parse()?,
            ..SimulationConfig::default()
        };
        Ok(Self::build(&config)?)
    }

    /// # Errors
    /// Malformed JSON or invalid settings.
    pub fn from_config_json(json: &str) -> Result<Universe, JsError> {
        let config = SimulationConfig::from_json(json)?;
        Ok(Self::build(&config)?)
    }

    /// Advance one tick; returns how many cells moved.
    pub fn tick(&mut self) -> usize {
        self.sim.tick().moved
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.sim.grid().width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.sim.grid().height()
    }

    #[must_use]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.sim.generation()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.sim.grid().occupied_count()
    }

    /// 0 for empty, 1 for occupied; out-of-range reads as empty.
    #[must_use]
    pub fn cell_at(&self, row: usize, col: usize) -> u8 {
        self.sim.grid().try_get(row, col).unwrap_or_default() as u8
    }

    /// Paint one cell between ticks. Out-of-range writes are ignored.
    pub fn set_cell(&mut self, row: usize, col: usize, occupied: bool) {
        if self.sim.grid().in_bounds(row, col) {
            self.sim.set_cell(row, col, Cell::from(occupied));
        }
    }

    /// Pointer to the settled buffer, valid until the next `tick`.
    #[must_use]
    pub fn cells_ptr(&self) -> *const u8 {
        self.sim.grid().cells().as_ptr().cast::<u8>()
    }
}
