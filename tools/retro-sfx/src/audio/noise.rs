//! Noise sources for the slide generator
//!
//! Offsets are integers on the 16-bit sample scale.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Largest offset [`RandomNoise`] produces, in either direction
pub const NOISE_SPREAD: i32 = 1000;

/// Per-sample noise offsets
pub trait NoiseSource {
    /// Next offset to add to a sample
    fn next_offset(&mut self) -> i32;
}

/// Uniform noise in `[-NOISE_SPREAD, NOISE_SPREAD]`
pub struct RandomNoise<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomNoise<StdRng> {
    /// Seed from the operating system. Output differs on every run.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl RandomNoise<Pcg32> {
    /// Reproducible noise from a seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> NoiseSource for RandomNoise<R> {
    fn next_offset(&mut self) -> i32 {
        self.rng.random_range(-NOISE_SPREAD..=NOISE_SPREAD)
    }
}

/// Cycles through a fixed list of offsets
///
/// An empty list yields 0 forever.
#[derive(Debug, Clone, Default)]
pub struct FixedNoise {
    offsets: Vec<i32>,
    cursor: usize,
}

impl FixedNoise {
    pub fn new(offsets: Vec<i32>) -> Self {
        Self { offsets, cursor: 0 }
    }
}

impl NoiseSource for FixedNoise {
    fn next_offset(&mut self) -> i32 {
        if self.offsets.is_empty() {
            return 0;
        }
        let value = self.offsets[self.cursor];
        self.cursor = (self.cursor + 1) % self.offsets.len();
        value
    }
}

/// No noise
#[derive(Debug, Clone, Copy, Default)]
pub struct Silence;

impl NoiseSource for Silence {
    fn next_offset(&mut self) -> i32 {
        0
    }
}
