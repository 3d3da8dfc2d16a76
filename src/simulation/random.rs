use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of uniform samples driving fuel jitter and breakdown rolls.
///
/// Tests substitute a scripted source so a tick becomes reproducible.
pub trait RandomSource {
    /// Uniform sample in [0, 1)
    fn next_unit(&mut self) -> f64;
}

/// Adapts any `rand` generator to [`RandomSource`]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Seeded generator when `seed` is set, OS entropy otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of samples, then repeats `fallback` forever
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    samples: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedRandom {
    pub fn new(samples: impl IntoIterator<Item = f64>, fallback: f64) -> Self {
        Self {
            samples: samples.into_iter().collect(),
            fallback,
        }
    }

    /// Every draw returns `value`
    pub fn constant(value: f64) -> Self {
        Self::new(Vec::new(), value)
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        self.samples.pop_front().unwrap_or(self.fallback)
    }
}
