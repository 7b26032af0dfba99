//! Deterministic simulation RNG.
//!
//! The simulator consumes randomness in two places only: generating the
//! initial parcels and picking a random-walk direction.  Both draw from one
//! `SimRng` seeded from `SimConfig::seed`, so the same seed always replays the
//! same run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded simulation RNG.
///
/// Single-threaded by construction: the turn loop owns it and lends it to the
/// strategy for the duration of one call.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a uniformly random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
