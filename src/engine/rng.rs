//! Deterministic random number generation for rollouts.
//!
//! ## Key Features
//!
//! - **Deterministic**: the same seed produces the same action draws, so a
//!   planner run is reproducible in tests.
//! - **Forkable**: each planning round can branch an independent stream
//!   without disturbing the parent sequence.
//! - **Serializable**: O(1) state capture via the ChaCha word position.
//!
//! Production entry points seed from OS entropy; tests pin a seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seedable RNG with forking, backing the planner's uniform action draws.
///
/// ChaCha8 keeps draws fast while staying deterministic across platforms.
#[derive(Clone, Debug)]
pub struct DuelRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl DuelRng {
    /// Create an RNG from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy, recording the chosen seed so
    /// a surprising game can still be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was built from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// A random index in `range`.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// A random element of `slice`, or `None` if empty.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Capture the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DuelRngState {
        DuelRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a captured state.
    #[must_use]
    pub fn from_state(state: &DuelRngState) -> Self {
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
/// The ChaCha word position makes capture O(1) regardless of how many
/// values have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha word position (128-bit counter).
    pub word_pos: u128,
    /// Fork counter for deterministic branching.
    pub fork_counter: u64,
}
