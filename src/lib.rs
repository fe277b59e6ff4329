//! # lights-out
//!
//! A "Lights Out" puzzle engine: a rectangular grid of lit/unlit cells
//! where pressing one cell toggles it together with its orthogonal
//! neighbors, and the player wins when every cell is off.
//!
//! ## Design Principles
//!
//! 1. **Solvable by construction**: starting boards are generated by
//!    applying random cross-toggles to the solved board. Toggling is an
//!    involution, so every generated board can be solved by replaying its
//!    own scramble — independent per-cell random lighting (which can
//!    produce unsolvable boards) is never used.
//!
//! 2. **Immutable snapshots**: grids are persistent data structures.
//!    Every operation returns a new snapshot, so a host holds exactly one
//!    current board and renderers reading an older snapshot are never
//!    surprised mid-frame.
//!
//! 3. **Injectable randomness**: generation takes a seedable
//!    [`PuzzleRng`], making boards reproducible in tests while production
//!    seeds from entropy.
//!
//! ## Modules
//!
//! - `core`: coordinates, the grid, RNG, configuration
//! - `engine`: the cross-toggle rule, board generation, win detection
//! - `session`: host-facing game sessions with move history and restart
//!
//! ## Quick Start
//!
//! ```
//! use lights_out::{Coord, PuzzleConfig, PuzzleEngine, PuzzleRng};
//!
//! let engine = PuzzleEngine::new(PuzzleConfig::new(5, 5));
//! let mut rng = PuzzleRng::new(42);
//!
//! let board = engine.generate_initial(&mut rng);
//! let board = engine.toggle_around(&board, Coord::new(2, 2));
//! let _won = engine.has_won(&board);
//! ```

pub mod core;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Coord, Grid, PuzzleConfig, PuzzleRng, PuzzleRngState, DEFAULT_COLS, DEFAULT_ROWS,
    DEFAULT_SCRAMBLE_MOVES,
};

pub use crate::engine::{PuzzleEngine, PuzzleStatus};

pub use crate::session::Session;
