//! Pseudo-random number generator wrapper for path sampling.
//!
//! This module provides [`WalkRng`], a seeded PRNG wrapper that offers
//! reproducible random number generation with efficient batch operations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Distribution;
use trinomial_core::StepOutcome;

use super::step::StepDistribution;

/// Random number generator for trinomial path sampling.
///
/// # Examples
///
/// ```rust
/// use trinomial_engine::rng::WalkRng;
///
/// let mut rng = WalkRng::from_seed(42);
///
/// let u: f64 = rng.gen_uniform();
/// assert!((0.0..1.0).contains(&u));
///
/// let mut buffer = vec![0.0; 100];
/// rng.fill_uniform(&mut buffer);
/// ```
#[derive(Debug, Clone)]
pub struct WalkRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
}

impl WalkRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// The same seed always produces the same sequence.
    ///
    /// ```rust
    /// use trinomial_engine::rng::WalkRng;
    ///
    /// let mut rng1 = WalkRng::from_seed(12345);
    /// let mut rng2 = WalkRng::from_seed(12345);
    /// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a new RNG instance with a seed drawn from the thread-local
    /// entropy source.
    #[inline]
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::thread_rng().gen())
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single uniform random value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Draws one step outcome from a categorical distribution.
    #[inline]
    pub fn gen_outcome(&mut self, dist: &StepDistribution) -> StepOutcome {
        dist.sample(&mut self.inner)
    }

    /// Fills the buffer with uniform random values in [0, 1).
    ///
    /// This is a zero-allocation operation; the buffer must be pre-allocated
    /// by the caller. Empty buffers are handled gracefully (no operation).
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.inner.gen();
        }
    }
}
