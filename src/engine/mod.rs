//! The puzzle rules: cross-toggle, generation, win detection.
//!
//! [`PuzzleEngine`] implements the game's only rule — pressing a cell
//! toggles it together with its four orthogonal neighbors — plus the
//! scrambler that produces starting boards. Every operation is
//! parameterized by the grid passed in; the engine holds no board state of
//! its own, so one engine can serve any number of concurrent sessions
//! without locking.
//!
//! ## Solvability by construction
//!
//! Starting boards are built by applying random cross-toggles to an
//! all-off grid. Because a cross-toggle is its own inverse, replaying the
//! scramble sequence from the generated board returns it to all-off, so
//! every generated board is solvable. Lighting cells independently at
//! random (the obvious alternative) can produce boards that are
//! mathematically unsolvable under the cross-toggle rule, and is
//! deliberately not offered.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Coord, Grid, PuzzleConfig, PuzzleRng};

/// Derived game status.
///
/// "Won" is a predicate over the grid, never a stored flag. The engine
/// keeps computing correctly if a host applies moves after a win; whether
/// to allow that is host policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleStatus {
    /// At least one cell is still lit.
    InProgress,
    /// Every cell is off.
    Won,
}

impl PuzzleStatus {
    /// Check whether this status is a win.
    #[must_use]
    pub fn is_won(self) -> bool {
        matches!(self, PuzzleStatus::Won)
    }
}

/// The rules engine for one board shape.
///
/// Construct once per configuration; all methods take the grid to operate
/// on, so grids from the same engine can be snapshotted and replayed
/// freely.
#[derive(Clone, Debug)]
pub struct PuzzleEngine {
    config: PuzzleConfig,
}

impl PuzzleEngine {
    /// Create an engine for the given configuration.
    #[must_use]
    pub fn new(config: PuzzleConfig) -> Self {
        Self { config }
    }

    /// Get the engine configuration.
    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Create an all-off grid with the configured dimensions.
    ///
    /// Pure and deterministic; this is the solved state.
    #[must_use]
    pub fn new_grid(&self) -> Grid {
        Grid::new(self.config.rows, self.config.cols)
    }

    /// Generate a starting board.
    ///
    /// Draws a move count from the configured scramble range, then applies
    /// that many cross-toggles at uniformly random in-bounds coordinates.
    /// The result is always solvable; see the module docs.
    #[must_use]
    pub fn generate_initial(&self, rng: &mut PuzzleRng) -> Grid {
        self.scramble(rng).0
    }

    /// Generate a starting board along with the toggle sequence that
    /// produced it.
    ///
    /// Replaying the returned sequence on the returned grid (in any order)
    /// restores the all-off state, which makes the trace usable as a
    /// solution hint and as a solvability check in tests.
    #[must_use]
    pub fn scramble(&self, rng: &mut PuzzleRng) -> (Grid, Vec<Coord>) {
        let moves = rng.gen_range_inclusive(self.config.scramble_moves.clone());

        let mut grid = self.new_grid();
        let mut trace = Vec::with_capacity(moves);
        for _ in 0..moves {
            let coord = Coord::new(
                rng.gen_range_usize(0..self.config.rows),
                rng.gen_range_usize(0..self.config.cols),
            );
            grid = self.toggle_around(&grid, coord);
            trace.push(coord);
        }

        (grid, trace)
    }

    /// Apply the cross-toggle rule: flip the cell at `coord` and its four
    /// orthogonal neighbors, skipping any candidate outside the grid.
    ///
    /// Returns a new snapshot; the input grid is unchanged. Total for any
    /// coordinate, in-bounds or not — a fully out-of-bounds press returns
    /// an identical board.
    #[must_use]
    pub fn toggle_around(&self, grid: &Grid, coord: Coord) -> Grid {
        let mut candidates: SmallVec<[Coord; 5]> = SmallVec::new();
        candidates.push(coord);
        candidates.extend(coord.orthogonal_neighbors());

        let mut next = grid.clone();
        for candidate in candidates {
            if next.contains(candidate) {
                next = next.toggled(candidate);
            }
        }
        next
    }

    /// True iff every cell is off.
    #[must_use]
    pub fn has_won(&self, grid: &Grid) -> bool {
        grid.is_cleared()
    }

    /// Derived status for a grid.
    #[must_use]
    pub fn status(&self, grid: &Grid) -> PuzzleStatus {
        if self.has_won(grid) {
            PuzzleStatus::Won
        } else {
            PuzzleStatus::InProgress
        }
    }
}
