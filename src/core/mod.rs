//! Core puzzle types: coordinates, the grid, RNG, configuration.
//!
//! This module contains the building blocks that carry no game flow of
//! their own. Hosts configure them via `PuzzleConfig` rather than
//! modifying the core.

pub mod config;
pub mod coord;
pub mod grid;
pub mod rng;

pub use config::{PuzzleConfig, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SCRAMBLE_MOVES};
pub use coord::Coord;
pub use grid::Grid;
pub use rng::{PuzzleRng, PuzzleRngState};
