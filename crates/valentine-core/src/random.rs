//! Pluggable randomness for cosmetic values.
//!
//! Evasion offsets, confetti spread and backdrop placement all draw from a
//! [`RandomSource`]. The desktop app uses [`ThreadRandom`] (or [`SeededRandom`]
//! when started with `--seed`); tests supply a [`FixedSequence`] and assert
//! exact outputs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform values in `[0, 1]`.
pub trait RandomSource {
    /// Next value, expected in `[0, 1]`.
    fn next_unit(&mut self) -> f64;

    /// Uniform value in `[lo, hi]`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = self.next_unit().clamp(0.0, 1.0);
        // weighted form stays finite when `hi - lo` would overflow
        lo * (1.0 - unit) + hi * unit
    }
}

/// Unseeded, non-reproducible randomness from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Reproducible randomness from a fixed seed.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Values outside `[0, 1]` are clamped. An empty list always yields `0.5`.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedSequence {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for FixedSequence {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = (self.cursor + 1) % self.values.len();
        value.clamp(0.0, 1.0)
    }
}

/// Runtime choice between thread and seeded randomness.
#[derive(Debug, Clone)]
pub enum CardRng {
    Thread(ThreadRandom),
    Seeded(SeededRandom),
}

impl CardRng {
    /// Seeded when a seed is given, thread randomness otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => CardRng::Seeded(SeededRandom::new(seed)),
            None => CardRng::Thread(ThreadRandom),
        }
    }
}

impl Default for CardRng {
    fn default() -> Self {
        CardRng::Thread(ThreadRandom)
    }
}

impl RandomSource for CardRng {
    fn next_unit(&mut self) -> f64 {
        match self {
            CardRng::Thread(rng) => rng.next_unit(),
            CardRng::Seeded(rng) => rng.next_unit(),
        }
    }
}
