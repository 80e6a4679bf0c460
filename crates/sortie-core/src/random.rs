//! Injectable random source.
//!
//! Every random decision in the simulation draws from a `RandomSource`, so a
//! seed (or a scripted sequence) fully determines a run.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// Uniform sample in `[lo, hi)`.
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.unit()
    }

    fn chance(&mut self, probability: f32) -> bool {
        self.unit() < probability
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        ((self.unit() * len as f32) as usize).min(len.saturating_sub(1))
    }
}

/// Seeded ChaCha8 source used by the engine.
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Always returns `value`.
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRandom {
    fn unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 0.999_999)
    }
}
