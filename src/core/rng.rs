//! Deterministic random number generation for question draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical question sequence
//! - **Serializable**: O(1) state capture and restore, so a `GameState`
//!   snapshot can carry its RNG position instead of a live generator
//!
//! ```
//! use flag_quiz::core::QuizRng;
//!
//! let mut rng = QuizRng::new(42);
//! let saved = rng.state();
//! let first = rng.gen_range_usize(0..100);
//!
//! let mut restored = QuizRng::from_state(&saved);
//! assert_eq!(restored.gen_range_usize(0..100), first);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Deterministic RNG backing question draws.
///
/// Uses ChaCha8 for speed while keeping a word position that can be
/// captured and restored exactly.
#[derive(Clone, Debug)]
pub struct QuizRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl QuizRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Sample `amount` distinct indices from `0..length`, uniformly and
    /// without replacement, in random order.
    ///
    /// Returns `None` if `amount > length`.
    pub fn sample_distinct(
        &mut self,
        length: usize,
        amount: usize,
    ) -> Option<SmallVec<[usize; 4]>> {
        if amount > length {
            return None;
        }
        Some(rand::seq::index::sample(&mut self.inner, length, amount).into_iter().collect())
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> QuizRngState {
        QuizRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &QuizRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state carried inside every game snapshot.
///
/// Uses the ChaCha8 word position, so restoring costs the same no matter
/// how many questions have been drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuizRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
