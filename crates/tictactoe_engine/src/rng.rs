//! Seedable random source handed to strategies.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic RNG that remembers its seed.
///
/// Strategies never reach for a global generator; whoever builds them
/// passes one of these in, so tests and replays can fix the seed.
#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    /// Creates a generator from a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator seeded from OS entropy.
    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    /// The seed this generator started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derives an independent child generator.
    pub fn fork(&mut self) -> Self {
        Self::new(self.rng.random())
    }

    /// Uniformly picks one element, `None` for an empty slice.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        Some(items[self.rng.random_range(0..items.len())])
    }
}
