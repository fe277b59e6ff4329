//! The puzzle board.
//!
//! ## Grid
//!
//! A rows × cols matrix of booleans (`true` = lit) backed by an `im`
//! persistent vector, so cloning a snapshot and producing a toggled
//! successor are both cheap and leave earlier snapshots untouched. A host
//! holds one current snapshot and swaps it wholesale after each move;
//! nothing ever mutates a Grid a reader might still be looking at.
//!
//! Dimensions are fixed for the lifetime of a Grid. All cell access is
//! bounds-checked: out-of-range coordinates read as unlit and toggle as
//! no-ops, which is exactly what the cross-toggle rule needs at edges and
//! corners.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// A rows × cols board of lit/unlit cells.
///
/// Value semantics: operations that change cells return a new `Grid`
/// sharing structure with the original.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cell states, `rows * cols` entries.
    cells: Vector<bool>,
}

impl Grid {
    /// Create an all-unlit grid.
    ///
    /// ## Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1, "Grid must have at least 1 row");
        assert!(cols >= 1, "Grid must have at least 1 column");

        Self {
            rows,
            cols,
            cells: std::iter::repeat(false).take(rows * cols).collect(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether a coordinate lies within this grid's bounds.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// The cell state at `coord`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<bool> {
        if self.contains(coord) {
            self.cells.get(self.index(coord)).copied()
        } else {
            None
        }
    }

    /// Whether the cell at `coord` is lit. Out-of-bounds reads as unlit.
    #[must_use]
    pub fn is_lit(&self, coord: Coord) -> bool {
        self.get(coord).unwrap_or(false)
    }

    /// A new grid with the single cell at `coord` flipped.
    ///
    /// Out-of-bounds coordinates return an unchanged clone. This flips one
    /// cell only; the cross-toggle rule lives in the engine.
    #[must_use]
    pub fn toggled(&self, coord: Coord) -> Self {
        if !self.contains(coord) {
            return self.clone();
        }
        let index = self.index(coord);
        let lit = self.cells[index];
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.update(index, !lit),
        }
    }

    /// True iff every cell is unlit — the win condition.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    /// Number of lit cells.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    /// Iterate over one row's cell states, left to right.
    ///
    /// ## Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> impl Iterator<Item = bool> + '_ {
        assert!(row < self.rows, "row {} out of bounds", row);
        (0..self.cols).map(move |col| self.cells[row * self.cols + col])
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }
}

/// Renders the board one row per line, `O` for lit and `.` for unlit:
///
/// ```text
/// . . .
/// O O .
/// . . .
/// ```
impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            for (col, lit) in self.row(row).enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", if lit { 'O' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
