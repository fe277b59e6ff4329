//! Cell coordinates.
//!
//! A [`Coord`] is a structured `(row, col)` pair. The engine never encodes
//! positions as combined string keys; hosts that receive click events keyed
//! by strings parse them at the boundary and pass a `Coord` in.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A cell position on the grid: 0-based row and column indices.
///
/// Coordinates are not required to be in bounds for any grid; grid
/// operations treat out-of-bounds coordinates as no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index (0 is the top row).
    pub row: usize,
    /// Column index (0 is the leftmost column).
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The orthogonal neighbors of this coordinate: up, down, left, right.
    ///
    /// Neighbors that would underflow below row or column 0 are omitted,
    /// so the result holds between 2 and 4 entries. Neighbors beyond a
    /// grid's far edges are still included; bounds against a particular
    /// grid are the grid's concern.
    #[must_use]
    pub fn orthogonal_neighbors(self) -> SmallVec<[Coord; 4]> {
        let mut neighbors = SmallVec::new();
        if self.row > 0 {
            neighbors.push(Coord::new(self.row - 1, self.col));
        }
        neighbors.push(Coord::new(self.row + 1, self.col));
        if self.col > 0 {
            neighbors.push(Coord::new(self.row, self.col - 1));
        }
        neighbors.push(Coord::new(self.row, self.col + 1));
        neighbors
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
