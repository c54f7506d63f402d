//! A thin seedable PRNG wrapper. The only thing the search uses randomness
//! for is the 50%-replacement tie-break when two candidate moves score
//! equally; everything else in the engine is deterministic.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

pub struct Prng(StdRng);

impl Prng {
    pub fn seeded(seed: u64) -> Self {
        Prng(StdRng::seed_from_u64(seed))
    }

    /// True roughly half the time.
    pub fn coin_flip(&mut self) -> bool {
        self.0.next_u32() % 2 == 0
    }
}

impl Default for Prng {
    fn default() -> Self {
        Prng::seeded(crate::config::PRNG_SEED)
    }
}
