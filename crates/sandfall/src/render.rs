//! Renderer-facing view of a settled grid.
//!
//! The crate does not draw anything. A renderer reads cells through
//! [`CellView`] and asks a [`Viewport`] where each one lands on screen.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::grid::Grid;

/// Read-only access a renderer needs.
pub trait CellView {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn cell_at(&self, row: usize, col: usize) -> Cell;
}

impl CellView for Grid {
    fn width(&self) -> usize {
        Grid::width(self)
    }

    fn height(&self) -> usize {
        Grid::height(self)
    }

    fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.get(row, col)
    }
}

/// Filled square for one cell, in pixels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub size: u32,
    pub cell: Cell,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Viewport {
    pub cell_size: u32,
    pub origin_x: i32,
    pub origin_y: i32,
}

impl Viewport {
    #[must_use]
    pub fn new(cell_size: u32, origin_x: i32, origin_y: i32) -> Self {
        Self {
            cell_size,
            origin_x,
            origin_y,
        }
    }

    /// Offset the grid by a quarter of the screen resolution on each axis.
    #[must_use]
    pub fn centered(resolution_w: f32, resolution_h: f32, cell_size: u32) -> Self {
        Self::new(cell_size, (resolution_w * 0.25) as i32, (resolution_h * 0.25) as i32)
    }

    #[must_use]
    pub fn rect(&self, row: usize, col: usize, cell: Cell) -> CellRect {
        let size = self.cell_size as i32;
        CellRect {
            x: col as i32 * size + self.origin_x,
            y: row as i32 * size + self.origin_y,
            size: self.cell_size,
            cell,
        }
    }

    /// One rectangle per cell, in row-major order.
    pub fn rects<'a, V: CellView + ?Sized>(&'a self, view: &'a V) -> impl Iterator<Item = CellRect> + 'a {
        let (width, height) = (view.width(), view.height());
        (0..width * height).map(move |i| {
            let (row, col) = (i / width, i % width);
            self.rect(row, col, view.cell_at(row, col))
        })
    }
}

/// RGBA colors for the two cell states.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Palette {
    pub occupied: [u8; 4],
    pub empty: [u8; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            occupied: [230, 41, 55, 255],
            empty: [0, 0, 0, 255],
        }
    }
}

impl Palette {
    #[must_use]
    pub fn color(&self, cell: Cell) -> [u8; 4] {
        match cell {
            Cell::Occupied => self.occupied,
            Cell::Empty => self.empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rects_cover_grid_in_row_major_order() {
        let grid = Grid::from_ascii(&["#.", ".#"]);
        let viewport = Viewport::new(10, 5, 7);
        let rects: Vec<CellRect> = viewport.rects(&grid).collect();
        assert_eq!(rects.len(), 4);
        assert_eq!(rects[0], CellRect { x: 5, y: 7, size: 10, cell: Cell::Occupied });
        assert_eq!(rects[1], CellRect { x: 15, y: 7, size: 10, cell: Cell::Empty });
        assert_eq!(rects[3], CellRect { x: 15, y: 17, size: 10, cell: Cell::Occupied });
    }

    #[test]
    fn centered_offsets_by_quarter_resolution() {
        let viewport = Viewport::centered(2000.0, 1000.0, 10);
        assert_eq!(viewport, Viewport::new(10, 500, 250));
    }

    #[test]
    fn palette_maps_states() {
        let palette = Palette::default();
        assert_eq!(palette.color(Cell::Occupied), [230, 41, 55, 255]);
        assert_eq!(palette.color(Cell::Empty), [0, 0, 0, 255]);
    }

    #[test]
    fn grid_is_a_cell_view() {
        let grid = Grid::from_ascii(&["..#"]);
        let view: &dyn CellView = &grid;
        assert_eq!((view.width(), view.height()), (3, 1));
        assert_eq!(view.cell_at(0, 2), Cell::Occupied);
    }
}
