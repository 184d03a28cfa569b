//! Random account-number generation
//!
//! `RandomAccountNumbers` draws uniformly from the 6-digit range using a
//! `StdRng`. It is seeded from the operating system by default, or from a
//! fixed seed when reproducible runs are wanted.

use crate::core::traits::AccountNumberSource;
use crate::types::{AccountNumber, ACCOUNT_NUMBER_MAX, ACCOUNT_NUMBER_MIN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random source of 6-digit account numbers
#[derive(Debug, Clone)]
pub struct RandomAccountNumbers {
    rng: StdRng,
}

impl RandomAccountNumbers {
    /// Create a source seeded from operating-system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a source with a fixed seed
    ///
    /// Two sources built from the same seed yield the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAccountNumbers {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountNumberSource for RandomAccountNumbers {
    fn draw(&mut self) -> AccountNumber {
        AccountNumber::new(self.rng.gen_range(ACCOUNT_NUMBER_MIN..=ACCOUNT_NUMBER_MAX))
    }
}
