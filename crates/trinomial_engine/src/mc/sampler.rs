//! Path sampler orchestration.
//!
//! [`PathSampler`] owns a [`WalkRng`] and a [`PathWorkspace`] and turns a
//! `(n_steps, probs, n_simulations)` request into a fresh [`PathMatrix`]:
//!
//! 1. Validate counts and probabilities (before any random draw)
//! 2. Size the workspace and fill all `n_simulations × n_steps` uniforms in
//!    one batch
//! 3. Map and accumulate in one pass ([`generate_walk_paths`])

use tracing::debug;
use trinomial_core::moments::positive_count;
use trinomial_core::{ProbabilityTriple, WalkError};

use super::config::{validate_grid, validate_steps, SimulationConfig};
use super::matrix::PathMatrix;
use super::paths::{generate_walk_paths, walk_single_path};
use super::workspace::PathWorkspace;
use crate::rng::{StepDistribution, WalkRng};

/// Bulk sampler of trinomial walk paths.
///
/// Each call draws fresh randomness; nothing is memoised. The workspace
/// is reused across calls, the returned matrices are not.
///
/// # Examples
///
/// ```rust
/// use trinomial_engine::mc::PathSampler;
/// use trinomial_core::ProbabilityTriple;
///
/// let probs = ProbabilityTriple::new(0.4, 0.2, 0.4).unwrap();
/// let mut sampler = PathSampler::from_seed(42);
///
/// let first = sampler.sample(30, &probs, 1000).unwrap();
/// let second = sampler.sample(30, &probs, 1000).unwrap();
///
/// assert_eq!(first.shape(), (1000, 31));
/// assert_ne!(first, second);
/// ```
#[derive(Debug, Clone)]
pub struct PathSampler {
    rng: WalkRng,
    workspace: PathWorkspace,
}

impl PathSampler {
    /// Creates a sampler seeded from the thread-local entropy source.
    pub fn new() -> Self {
        Self::with_rng(WalkRng::from_entropy())
    }

    /// Creates a reproducible sampler.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(WalkRng::from_seed(seed))
    }

    /// Creates a sampler honouring the configuration's optional seed and
    /// pre-sizing the workspace for it.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let rng = config
            .seed()
            .map_or_else(WalkRng::from_entropy, WalkRng::from_seed);
        Self {
            rng,
            workspace: PathWorkspace::new(config.n_simulations(), config.n_steps()),
        }
    }

    fn with_rng(rng: WalkRng) -> Self {
        Self {
            rng,
            workspace: PathWorkspace::default(),
        }
    }

    /// Seed of the underlying generator.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Bytes currently held by the reusable workspace.
    #[inline]
    pub fn workspace_memory(&self) -> usize {
        self.workspace.memory_usage()
    }

    /// Samples `n_simulations` independent paths of `n_steps` steps.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::InvalidParameter`] if either count is zero or
    /// above its limit ([`MAX_STEPS`](super::MAX_STEPS),
    /// [`MAX_SIMULATIONS`](super::MAX_SIMULATIONS)), or if the grid exceeds
    /// [`MAX_OUTCOMES`](super::MAX_OUTCOMES). No randomness is
    /// consumed on error.
    pub fn sample(
        &mut self,
        n_steps: usize,
        probs: &ProbabilityTriple,
        n_simulations: usize,
    ) -> Result<PathMatrix, WalkError> {
        validate_grid(n_steps, n_simulations)?;

        debug!(
            n_steps,
            n_simulations,
            p_up = probs.p_up(),
            p_neutral = probs.p_neutral(),
            p_down = probs.p_down(),
            seed = self.rng.seed(),
            "sampling trinomial paths"
        );

        self.workspace.ensure_capacity(n_simulations, n_steps);
        self.rng.fill_uniform(self.workspace.uniforms_mut());

        Ok(generate_walk_paths(&self.workspace, probs))
    }

    /// Samples with the dimensions of a validated configuration.
    ///
    /// The configuration's seed only applies when the sampler is built with
    /// [`from_config`](Self::from_config).
    pub fn sample_with_config(
        &mut self,
        config: &SimulationConfig,
        probs: &ProbabilityTriple,
    ) -> Result<PathMatrix, WalkError> {
        self.sample(config.n_steps(), probs, config.n_simulations())
    }

    /// Samples one path step by step.
    ///
    /// Equivalent in distribution to a single row of [`sample`](Self::sample);
    /// intended for the "draw one more path" use case where a batch buffer is
    /// unnecessary.
    pub fn sample_single_path(
        &mut self,
        n_steps: usize,
        probs: &ProbabilityTriple,
    ) -> Result<Vec<f64>, WalkError> {
        validate_steps(n_steps)?;
        let dist = StepDistribution::new(probs)?;

        debug!(n_steps, seed = self.rng.seed(), "sampling single path");
        Ok(walk_single_path(&mut self.rng, &dist, n_steps))
    }
}

impl Default for PathSampler {
    fn default() -> Self {
        Self::new()
    }
}

/// Samples paths for untyped inputs with fresh entropy.
///
/// Returns an `n_simulations × (n_steps + 1)` matrix whose rows start at 0
/// and move by `+1`, `0` or `-1` per step.
///
/// # Errors
///
/// Returns [`WalkError::InvalidParameter`] when `n_steps <= 0`,
/// `n_simulations <= 0`, a probability is negative, or the probabilities do
/// not sum to 1 within [`PROBABILITY_TOLERANCE`](trinomial_core::PROBABILITY_TOLERANCE).
///
/// # Examples
///
/// ```rust
/// use trinomial_engine::generate_paths;
///
/// let paths = generate_paths(5, [1.0, 0.0, 0.0], 3).unwrap();
/// assert_eq!(paths.row(2), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
///
/// assert!(generate_paths(5, [0.5, 0.6, 0.1], 3).is_err());
/// assert!(generate_paths(0, [1.0, 0.0, 0.0], 3).is_err());
/// assert!(generate_paths(5, [1.0, 0.0, 0.0], -1).is_err());
/// ```
pub fn generate_paths(
    n_steps: i64,
    probs: [f64; 3],
    n_simulations: i64,
) -> Result<PathMatrix, WalkError> {
    let n_steps = positive_count("n_steps", n_steps)?;
    let n_simulations = positive_count("n_simulations", n_simulations)?;
    let probs = ProbabilityTriple::try_from(probs)?;

    PathSampler::new().sample(n_steps, &probs, n_simulations)
}
