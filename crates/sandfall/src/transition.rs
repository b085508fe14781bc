//! The falling-sand transition rule.
//!
//! Every decision in a tick reads the frozen pre-step grid; results go to a
//! separate buffer. A source first tries to fall straight down, then to one
//! of the two cells diagonally below. When both diagonals are free one value
//! is drawn from the rng (even goes left, odd goes right). No other branch
//! touches the rng.
//!
//! Because sources never see each other's moves, two of them can pick the same
//! destination in one tick. [`ConflictPolicy`] decides what happens then.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::grid::Grid;
use crate::neighborhood::Neighborhood;

/// How a destination claimed by more than one source is settled.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Last writer in index order wins. Earlier claimants still vacate their
    /// source, so the occupied count can drop.
    #[default]
    Overwrite,
    /// First claimant in index order wins; later claimants stay where they
    /// are. The occupied count is conserved.
    Resolve,
}

/// Counters for one tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct StepStats {
    /// Sources that vacated their cell.
    pub moved: usize,
    /// Rng draws taken for diagonal tie-breaks.
    pub tie_breaks: usize,
    /// Moves aimed at a destination already claimed this tick.
    pub collisions: usize,
}

/// Stateless rule applier; the only state across ticks is the caller's rng.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Transition {
    pub policy: ConflictPolicy,
}

impl Transition {
    #[must_use]
    pub fn new(policy: ConflictPolicy) -> Self {
        Self { policy }
    }

    /// Compute the next grid into a freshly allocated buffer.
    pub fn step<R: RngCore + ?Sized>(&self, current: &Grid, rng: &mut R) -> (Grid, StepStats) {
        let mut next = current.clone();
        let stats = self.step_into(current, &mut next, rng);
        (next, stats)
    }

    /// Compute the next grid into `next`, which is overwritten.
    ///
    /// # Panics
    /// If the two grids differ in dimensions.
    pub fn step_into<R: RngCore + ?Sized>(
        &self,
        current: &Grid,
        next: &mut Grid,
        rng: &mut R,
    ) -> StepStats {
        next.copy_from(current);
        let mut stats = StepStats::default();

        for i in 0..current.len() {
            if current.at(i).is_empty() {
                continue;
            }
            let hood = Neighborhood::new(current, i);
            if hood.is_floor() {
                continue;
            }
            let Some(dest) = destination(current, &hood, rng, &mut stats) else {
                continue;
            };

            // Destinations are empty in `current`, so an occupied one here was
            // written by an earlier source during this pass.
            if next.at(dest).is_occupied() {
                stats.collisions += 1;
                if self.policy == ConflictPolicy::Resolve {
                    continue;
                }
            }
            next.put(i, Cell::Empty);
            next.put(dest, Cell::Occupied);
            stats.moved += 1;
        }

        stats
    }
}

/// Next grid under the default (overwrite) policy.
pub fn step<R: RngCore + ?Sized>(current: &Grid, rng: &mut R) -> Grid {
    Transition::default().step(current, rng).0
}

fn destination<R: RngCore + ?Sized>(
    current: &Grid,
    hood: &Neighborhood<'_>,
    rng: &mut R,
    stats: &mut StepStats,
) -> Option<usize> {
    if hood.below().is_empty() {
        return Some(hood.below_index());
    }

    let free = |i: usize| current.at(i).is_empty();
    let left = hood.below_left_index().filter(|&i| free(i));
    let right = hood.below_right_index().filter(|&i| free(i));

    match (left, right) {
        (Some(l), Some(r)) => {
            stats.tie_breaks += 1;
            if rng.next_u32() % 2 == 0 {
                Some(l)
            } else {
                Some(r)
            }
        }
        (Some(l), None) => Some(l),
        (None, Some(r)) => Some(r),
        (None, None) => None,
    }
}
