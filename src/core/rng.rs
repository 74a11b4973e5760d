//! Deterministic random number generation for dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same identities, shuffle and layout
//! - **Forkable**: Each deal request gets its own independent stream
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork for a deal request
//! let mut deal_rng = rng.fork();
//!
//! // Forks are deterministic - same fork counter = same sequence
//! let mut rng2 = GameRng::new(42);
//! let mut deal_rng2 = rng2.fork();
//! assert_eq!(deal_rng.gen_index(0..=99), deal_rng2.gen_index(0..=99));
//! ```

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backing identity sampling and shuffling.
///
/// Uses ChaCha8 for speed while keeping good statistical quality,
/// so Fisher–Yates over it is uniform in practice.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
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

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a uniform index from an inclusive range.
    pub fn gen_index(&mut self, range: RangeInclusive<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
