//! Uniform random sources behind a small trait so draws can be replayed

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniformly distributed indices
pub trait RandomSource {
    /// Draw an index uniformly from `0..upper`
    ///
    /// Callers guarantee `upper > 0`.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Standard generator, seeded explicitly or from the operating system
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Reproducible source for a fixed seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_index(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}

/// Replays a fixed list of values, cycling once exhausted
///
/// Each value is reduced modulo the requested bound, so `SequenceSource::new(vec![0])`
/// always picks the first candidate.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<usize>,
    position: usize,
}

impl SequenceSource {
    /// Create a source replaying `values`
    pub const fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            position: 0,
        }
    }
}

impl RandomSource for SequenceSource {
    fn next_index(&mut self, upper: usize) -> usize {
        let Some(&value) = self.values.get(self.position) else {
            return 0;
        };
        self.position = (self.position + 1) % self.values.len();
        value % upper.max(1)
    }
}
