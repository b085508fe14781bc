//! Read-only view of the cells beneath one source cell.

use crate::cell::Cell;
use crate::grid::Grid;

/// Looks at the pre-step snapshot only. Neighbors past a side wall are `None`;
/// walls never wrap.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood<'a> {
    grid: &'a Grid,
    index: usize,
    col: usize,
}

impl<'a> Neighborhood<'a> {
    #[must_use]
    pub fn new(grid: &'a Grid, index: usize) -> Self {
        let (_, col) = grid.coords(index);
        Self { grid, index, col }
    }

    /// The floor row never acts as a movement source.
    #[must_use]
    pub fn is_floor(&self) -> bool {
        self.grid.is_bottom_row(self.index)
    }

    #[must_use]
    pub fn below_index(&self) -> usize {
        self.index + self.grid.width()
    }

    #[must_use]
    pub fn below(&self) -> Cell {
        self.grid.at(self.below_index())
    }

    #[must_use]
    pub fn below_left_index(&self) -> Option<usize> {
        (self.col > 0).then(|| self.below_index() - 1)
    }

    #[must_use]
    pub fn below_right_index(&self) -> Option<usize> {
        (self.col + 1 < self.grid.width()).then(|| self.below_index() + 1)
    }

    #[must_use]
    pub fn below_left(&self) -> Option<Cell> {
        self.below_left_index().map(|i| self.grid.at(i))
    }

    #[must_use]
    pub fn below_right(&self) -> Option<Cell> {
        self.below_right_index().map(|i| self.grid.at(i))
    }
}
