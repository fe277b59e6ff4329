//! Host-facing game sessions.
//!
//! A [`Session`] wires the engine to a single live game: it owns the
//! current grid snapshot, translates presses into cross-toggles, tracks
//! the move history, and reports the derived status after each move. Hosts
//! render from `grid()` and swap to the next snapshot implicitly by
//! calling [`Session::press`]; no other component ever holds a mutable
//! reference to the board.
//!
//! ```
//! use lights_out::{PuzzleConfig, Session};
//!
//! let mut session = Session::new(PuzzleConfig::new(5, 5), 42);
//! assert!(!session.has_won());
//!
//! let status = session.press((2, 2));
//! assert_eq!(session.move_count(), 1);
//! # let _ = status;
//! ```

use im::Vector;

use crate::core::{Coord, Grid, PuzzleConfig, PuzzleRng};
use crate::engine::{PuzzleEngine, PuzzleStatus};

/// One game in progress: an engine, the current board snapshot, and the
/// moves played so far.
#[derive(Clone, Debug)]
pub struct Session {
    engine: PuzzleEngine,
    rng: PuzzleRng,
    grid: Grid,
    moves: Vector<Coord>,
}

impl Session {
    /// Start a session with a seeded RNG; the same seed and config always
    /// produce the same starting board.
    #[must_use]
    pub fn new(config: PuzzleConfig, seed: u64) -> Self {
        Self::with_rng(config, PuzzleRng::new(seed))
    }

    /// Start a session seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy(config: PuzzleConfig) -> Self {
        Self::with_rng(config, PuzzleRng::from_entropy())
    }

    /// Start a session with an injected RNG.
    #[must_use]
    pub fn with_rng(config: PuzzleConfig, mut rng: PuzzleRng) -> Self {
        let engine = PuzzleEngine::new(config);
        let grid = engine.generate_initial(&mut rng);
        Self {
            engine,
            rng,
            grid,
            moves: Vector::new(),
        }
    }

    /// The rules engine backing this session.
    #[must_use]
    pub fn engine(&self) -> &PuzzleEngine {
        &self.engine
    }

    /// Read-only view of the current board snapshot.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Derived status of the current board.
    #[must_use]
    pub fn status(&self) -> PuzzleStatus {
        self.engine.status(&self.grid)
    }

    /// Whether every light is out.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.engine.has_won(&self.grid)
    }

    /// Press a cell: apply the cross-toggle rule, record the move, and
    /// return the resulting status.
    ///
    /// The session does not reject presses after a win; suppressing input
    /// on a solved board is the host's rendering policy.
    pub fn press(&mut self, coord: impl Into<Coord>) -> PuzzleStatus {
        let coord = coord.into();
        self.grid = self.engine.toggle_around(&self.grid, coord);
        self.moves.push_back(coord);
        self.status()
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = Coord> + '_ {
        self.moves.iter().copied()
    }

    /// Number of moves played.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Discard the board and scramble a fresh one, clearing the move
    /// history. Uses a fork of the session RNG, so restarts from the same
    /// seed are reproducible but differ from the original board.
    pub fn restart(&mut self) {
        let mut rng = self.rng.fork();
        self.grid = self.engine.generate_initial(&mut rng);
        self.rng = rng;
        self.moves = Vector::new();
    }
}
