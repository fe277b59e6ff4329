//! Deterministic random number generation for board scrambling.
//!
//! ## Key Features
//!
//! - **Deterministic**: the same seed reproduces the same scramble,
//!   which makes generated boards reproducible in tests.
//! - **Forkable**: derive independent streams for concurrent sessions.
//! - **Serializable**: O(1) state capture and restore.
//!
//! ## Usage
//!
//! ```
//! use lights_out::core::PuzzleRng;
//!
//! let mut rng = PuzzleRng::new(42);
//! let mut replay = PuzzleRng::new(42);
//! assert_eq!(rng.gen_range_usize(0..100), replay.gen_range_usize(0..100));
//!
//! // Forks produce different but deterministic sequences.
//! let mut session_rng = rng.fork();
//! let ours: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..100)).collect();
//! let theirs: Vec<_> = (0..10).map(|_| session_rng.gen_range_usize(0..100)).collect();
//! assert_ne!(ours, theirs);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG for puzzle generation.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// Inject a seeded instance for reproducible boards; use
/// [`PuzzleRng::from_entropy`] in production.
#[derive(Clone, Debug)]
pub struct PuzzleRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl PuzzleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen();
        Self::new(seed)
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence; use one
    /// fork per session when a host runs several games from one seed.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a uniform random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a uniform random usize in the given closed range.
    pub fn gen_range_inclusive(&mut self, range: std::ops::RangeInclusive<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> PuzzleRngState {
        PuzzleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &PuzzleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position for O(1) capture regardless of how many
/// numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
