//! Entropy-seeded random source.

use game_core::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// [`RandomSource`] backed by `rand`'s standard generator, seeded from the OS.
///
/// Use [`game_core::PcgRng`] instead when an encounter must be reproducible.
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for StdRandom {
    fn next_unit(&mut self) -> f32 {
        self.rng.r#gen::<f32>()
    }
}
