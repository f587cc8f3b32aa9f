//! Random sources for the demonstration coin flip in the login check.

use std::sync::{Arc, Mutex, PoisonError};

use formguard_core::RandomSource;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn draw(&self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        rand::rng().random_range(low..=high)
    }
}

/// A reproducible sequence, for tests and for replaying a run.
#[derive(Debug, Clone)]
pub struct SeededRandomSource {
    rng: Arc<Mutex<StdRng>>,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn draw(&self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_range(low..=high)
    }
}

/// Always yields the same value, clamped into the requested range.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandomSource(pub u32);

impl RandomSource for FixedRandomSource {
    fn draw(&self, low: u32, high: u32) -> u32 {
        self.0.clamp(low, high.max(low))
    }
}

/// The source selected in configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredRandomSource {
    Thread(ThreadRandomSource),
    Seeded(SeededRandomSource),
}

impl ConfiguredRandomSource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(SeededRandomSource::new(seed)),
            None => Self::Thread(ThreadRandomSource),
        }
    }
}

impl RandomSource for ConfiguredRandomSource {
    fn draw(&self, low: u32, high: u32) -> u32 {
        match self {
            Self::Thread(source) => source.draw(low, high),
            Self::Seeded(source) => source.draw(low, high),
        }
    }
}
