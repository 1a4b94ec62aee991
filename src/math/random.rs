//! Seeded randomness for reproducible attempts

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{AlgorithmError, Result};

/// Seeded random source for reproducible stochastic choices
///
/// Every attempt owns one, seeded from the attempt seed, so the same seed and
/// word list always produce the same grid.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Next float in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniformly pick one element
    ///
    /// # Errors
    ///
    /// Returns `EmptyPickSource` if `items` is empty
    pub fn pick<'a, T>(&mut self, items: &'a [T], operation: &'static str) -> Result<&'a T> {
        if items.is_empty() {
            return Err(AlgorithmError::EmptyPickSource { operation });
        }
        let index = (self.next_f64() * items.len() as f64).floor() as usize;
        items
            .get(index.min(items.len() - 1))
            .ok_or(AlgorithmError::EmptyPickSource { operation })
    }
}
