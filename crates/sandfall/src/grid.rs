//! Fixed-size, row-major occupancy grid.

use std::fmt;

use crate::cell::Cell;
use crate::error::GridError;

/// 2D grid of cells, row 0 at the top.
///
/// Dimensions are fixed at construction. `get`/`set` assert bounds in debug
/// builds; in release builds out-of-range reads return `Empty` and writes are
/// no-ops, so a bad coordinate never aliases onto another cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a `width * height` grid with every cell `Empty`.
    ///
    /// # Errors
    /// `InvalidDimensions` when either side is zero or the cell count overflows.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0)
            .ok_or(GridError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Empty; len],
        })
    }

    /// Build a grid and seed every cell from `init(index, row, col)`.
    ///
    /// # Errors
    /// Same as [`Grid::new`].
    pub fn from_fn<F>(width: usize, height: usize, init: F) -> Result<Self, GridError>
    where
        F: FnMut(usize, usize, usize) -> Cell,
    {
        let mut grid = Self::new(width, height)?;
        grid.fill_with(init);
        Ok(grid)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    #[must_use]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    #[must_use]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }

    #[must_use]
    pub fn is_bottom_row(&self, index: usize) -> bool {
        index / self.width == self.height - 1
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        debug_assert!(
            self.in_bounds(row, col),
            "get({row}, {col}) outside {}x{} grid",
            self.width,
            self.height
        );
        if self.in_bounds(row, col) {
            self.cells[self.index(row, col)]
        } else {
            Cell::Empty
        }
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(
            self.in_bounds(row, col),
            "set({row}, {col}) outside {}x{} grid",
            self.width,
            self.height
        );
        if self.in_bounds(row, col) {
            let i = self.index(row, col);
            self.cells[i] = cell;
        }
    }

    /// Checked read that reports out-of-range access in every build.
    ///
    /// # Errors
    /// `OutOfBounds` when `(row, col)` is outside the grid.
    pub fn try_get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        if self.in_bounds(row, col) {
            Ok(self.cells[self.index(row, col)])
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Visit every `(index, row, col)` in increasing index order.
    pub fn for_each_index<F>(&self, mut f: F)
    where
        F: FnMut(usize, usize, usize),
    {
        for i in 0..self.cells.len() {
            f(i, i / self.width, i % self.width);
        }
    }

    /// Overwrite every cell from `init(index, row, col)`, in index order.
    pub fn fill_with<F>(&mut self, mut init: F)
    where
        F: FnMut(usize, usize, usize) -> Cell,
    {
        let width = self.width;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = init(i, i / width, i % width);
        }
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Copy `other`'s cells into this buffer without reallocating.
    ///
    /// Both grids must share dimensions.
    pub(crate) fn copy_from(&mut self, other: &Grid) {
        assert_eq!(
            (self.width, self.height),
            (other.width, other.height),
            "buffer dimensions differ"
        );
        self.cells.copy_from_slice(&other.cells);
    }

    // Linear-index access for the transition pass, which already knows `i` is valid.
    pub(crate) fn at(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub(crate) fn put(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Parse rows of `#` (occupied) and `.` (empty). Test helper.
    #[cfg(test)]
    pub(crate) fn from_ascii(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows[0].len();
        let mut grid = Self::new(width, height).unwrap();
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), width, "ragged row {row}");
            for (col, ch) in line.chars().enumerate() {
                grid.set(row, col, Cell::from(ch == '#'));
            }
        }
        grid
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            let line: String = row.iter().map(|c| c.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
