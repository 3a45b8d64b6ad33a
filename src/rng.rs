//! Random number injection for the battle core.
//!
//! The engine, AI and encounter table never touch a concrete generator;
//! they draw through `RandomSource`, so every code path's exact draw
//! count and order can be replayed deterministically in tests.

use rand::Rng;

/// Uniform random draws consumed by the battle core.
pub trait RandomSource {
    /// Returns a uniform double in `[0.0, 1.0)`.
    fn next_unit(&mut self) -> f64;

    /// Returns a uniform double in `[min, max]`.
    fn next_range(&mut self, min: f64, max: f64) -> f64;
}

/// Production source backed by the thread-local generator.
pub struct DefaultRandom {
    rng: rand::rngs::ThreadRng,
}

impl DefaultRandom {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for DefaultRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random()
    }

    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        self.rng.random_range(min..=max)
    }
}

/// Replays a fixed sequence of unit draws, panicking when the script runs
/// dry. Exhaustion panics make draw-count regressions loud in tests, so
/// the per-path draw order stays an enforced contract.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    outcomes: Vec<f64>,
    index: usize,
}

impl ScriptedRandom {
    pub fn new(outcomes: Vec<f64>) -> Self {
        Self { outcomes, index: 0 }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.index >= self.outcomes.len() {
            panic!(
                "ScriptedRandom exhausted after {} draws; the code path drew more than scripted",
                self.index
            );
        }
        let outcome = self.outcomes[self.index];
        self.index += 1;
        outcome
    }

    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_unit() * (max - min)
    }
}
