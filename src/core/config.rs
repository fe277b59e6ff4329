//! Puzzle configuration.
//!
//! Hosts configure the engine at startup by providing a [`PuzzleConfig`]:
//! board dimensions plus the scramble-move range used when generating a
//! starting board. The engine never hardcodes a board size.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Default number of board rows.
pub const DEFAULT_ROWS: usize = 5;

/// Default number of board columns.
pub const DEFAULT_COLS: usize = 5;

/// Default closed range of scramble moves applied during generation.
///
/// A tunable default, not a correctness requirement: any count of random
/// cross-toggles yields a solvable board.
pub const DEFAULT_SCRAMBLE_MOVES: RangeInclusive<usize> = 25..=50;

/// Configuration for a puzzle session.
///
/// Dimensions are fixed for the lifetime of a session; restarting reuses
/// the same config with a fresh board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Number of board rows (at least 1).
    pub rows: usize,

    /// Number of board columns (at least 1).
    pub cols: usize,

    /// Closed range the scramble-move count is drawn from.
    pub scramble_moves: RangeInclusive<usize>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl PuzzleConfig {
    /// Create a configuration for a rows × cols board with the default
    /// scramble range.
    ///
    /// ## Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1, "Board must have at least 1 row");
        assert!(cols >= 1, "Board must have at least 1 column");

        Self {
            rows,
            cols,
            scramble_moves: DEFAULT_SCRAMBLE_MOVES,
        }
    }

    /// Set the closed range of scramble moves used during generation.
    ///
    /// ## Panics
    ///
    /// Panics if `min > max` or `min` is zero (a zero-move scramble would
    /// hand the player an already-won board).
    #[must_use]
    pub fn with_scramble_moves(mut self, min: usize, max: usize) -> Self {
        assert!(min >= 1, "Scramble range must start at 1 or more");
        assert!(min <= max, "Scramble range must be non-empty");
        self.scramble_moves = min..=max;
        self
    }

    /// Total number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}
