//! Double-buffered driver around the transition rule.

use log::{debug, trace};
use rand::RngCore;

use crate::cell::Cell;
use crate::config::SimulationConfig;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::rng::{self, SimRng};
use crate::transition::{ConflictPolicy, StepStats, Transition};

/// Owns the settled grid, a spare buffer of the same size and the rng.
///
/// `tick` writes into the spare buffer and swaps, so no tick allocates and
/// [`Simulation::grid`] only ever exposes a fully computed snapshot.
#[derive(Debug)]
pub struct Simulation<R = SimRng> {
    current: Grid,
    next: Grid,
    rng: R,
    transition: Transition,
    generation: u64,
}

impl Simulation<SimRng> {
    /// Build, seed and fill a grid from `config`.
    ///
    /// The chaotic fill and all later tie-breaks share one stream seeded by
    /// `config.seed`.
    ///
    /// # Errors
    /// Invalid dimensions or cell size.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut grid = Grid::new(config.width, config.height)?;
        let mut rng = rng::seeded(config.seed);
        config.initializer.apply(&mut grid, &mut rng);
        debug!(
            "simulation {}x{} seed={} init={} policy={:?} occupied={}",
            config.width,
            config.height,
            config.seed,
            config.initializer,
            config.conflict_policy,
            grid.occupied_count()
        );
        Ok(Self::new(grid, rng, config.conflict_policy))
    }
}

impl<R: RngCore> Simulation<R> {
    #[must_use]
    pub fn new(grid: Grid, rng: R, policy: ConflictPolicy) -> Self {
        let next = grid.clone();
        Self {
            current: grid,
            next,
            rng,
            transition: Transition::new(policy),
            generation: 0,
        }
    }

    /// Advance one tick.
    pub fn tick(&mut self) -> StepStats {
        let stats = self
            .transition
            .step_into(&self.current, &mut self.next, &mut self.rng);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;

        trace!(
            "tick {}: moved={} tie_breaks={} collisions={}",
            self.generation,
            stats.moved,
            stats.tie_breaks,
            stats.collisions
        );
        if stats.collisions > 0 && self.transition.policy == ConflictPolicy::Overwrite {
            debug!(
                "tick {}: {} cells lost to overwritten destinations",
                self.generation, stats.collisions
            );
        }
        stats
    }

    /// The settled grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Overwrite one settled cell between ticks (painting, scripted setups).
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        self.current.set(row, col, cell);
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn policy(&self) -> ConflictPolicy {
        self.transition.policy
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Hand back the settled grid, dropping the spare buffer.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.current
    }
}
