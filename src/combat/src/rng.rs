// src/combat/src/rng.rs

use rand::{
    distr::uniform,
    {Rng, SeedableRng},
};
use rand_pcg::Pcg32;

/// Lowest attack variance multiplier.
pub const DAMAGE_VARIANCE_MIN: f64 = 0.75;
/// Highest attack variance multiplier.
pub const DAMAGE_VARIANCE_MAX: f64 = 1.25;
/// Lowest per-attribute growth rate on level-up.
pub const GROWTH_RATE_MIN: f64 = 0.15;
/// Highest per-attribute growth rate on level-up.
pub const GROWTH_RATE_MAX: f64 = 0.35;

/// Deterministic RNG shared by everything random in a session.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: Pcg32,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Seeds from the thread-local entropy source.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: uniform::SampleUniform,
        R: uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// Multiplier applied to base attack damage, uniform in [0.75, 1.25].
    pub fn damage_variance(&mut self) -> f64 {
        self.random_range(DAMAGE_VARIANCE_MIN..=DAMAGE_VARIANCE_MAX)
    }

    /// Fraction an attribute grows by on level-up, uniform in [0.15, 0.35].
    pub fn growth_rate(&mut self) -> f64 {
        self.random_range(GROWTH_RATE_MIN..=GROWTH_RATE_MAX)
    }
}
