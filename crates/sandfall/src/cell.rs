//! Cell occupancy type for the simulation grid.

use std::fmt;

/// Discriminant values map directly to the `r8uint` render texture — do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Cell {
    #[default]
    Empty = 0,
    Occupied = 1,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Occupied => write!(f, "Occupied"),
        }
    }
}

impl From<bool> for Cell {
    fn from(occupied: bool) -> Self {
        if occupied {
            Self::Occupied
        } else {
            Self::Empty
        }
    }
}

impl Cell {
    #[must_use]
    pub fn is_occupied(self) -> bool {
        self == Self::Occupied
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// Single-character form used by grid dumps in tests and logs.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Occupied => '#',
        }
    }
}
