//! Rhombic Hex board geometry

use serde::{Deserialize, Serialize};

/// Cell coordinates on the rhombic grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Check if this cell lies on a board of the given side length
    pub fn in_bounds(&self, size: usize) -> bool {
        self.row >= 0
            && self.col >= 0
            && (self.row as usize) < size
            && (self.col as usize) < size
    }

    /// Neighbors clipped to board bounds (up to 6)
    pub fn neighbors(self, size: usize) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dr, dc)| Coord::new(self.row + dr, self.col + dc))
            .filter(move |c| c.in_bounds(size))
    }

    /// Row-major index into a dense grid of the given side length
    pub(crate) fn index(&self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    pub(crate) fn from_index(index: usize, size: usize) -> Self {
        Coord::new((index / size) as i8, (index % size) as i8)
    }
}

/// Neighbor offsets in (row, col) form.
/// Each cell touches its row and column neighbors plus the two diagonals
/// that complete the hex tiling.
pub const NEIGHBOR_OFFSETS: [(i8, i8); 6] = [
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
];
