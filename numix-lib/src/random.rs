//! Injected pseudo-random source shared by every mixer operation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pseudo-random generator handle passed explicitly to mixers.
///
/// Use [`RandomSource::seeded`] for reproducible runs and
/// [`RandomSource::from_entropy`] otherwise.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Create a generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic generator from a 64-bit seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a value uniformly from `low..=high`.
    pub fn between(&mut self, low: i32, high: i32) -> i32 {
        self.rng.gen_range(low..=high)
    }

    /// Draw a `u32` uniformly from `low..=high`.
    pub fn between_u32(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }

    /// Draw a uniform index into a collection of `len` elements.
    ///
    /// `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Draw `len` values uniformly from `low..=high`.
    pub fn dataset(&mut self, len: usize, low: i32, high: i32) -> Vec<i32> {
        (0..len).map(|_| self.between(low, high)).collect()
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}
