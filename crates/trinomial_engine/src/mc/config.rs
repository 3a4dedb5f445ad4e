//! Simulation configuration.
//!
//! This module provides configuration types and builders for Monte Carlo
//! sampling of trinomial walks.

use trinomial_core::WalkError;

/// Maximum number of simulated paths allowed.
pub const MAX_SIMULATIONS: usize = 10_000_000;

/// Maximum number of steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Maximum number of step outcomes (`n_steps * n_simulations`) per
/// sampling call. Bounds the uniform buffer at 800 MB.
pub const MAX_OUTCOMES: usize = 100_000_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying the grid size and optional seed.
/// Use [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use trinomial_engine::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_steps(100)
///     .n_simulations(5_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_simulations(), 5_000);
/// assert_eq!(config.n_steps(), 100);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationConfig {
    /// Number of steps per path.
    n_steps: usize,
    /// Number of independent paths.
    n_simulations: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the number of independent paths.
    #[inline]
    pub fn n_simulations(&self) -> usize {
        self.n_simulations
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Total number of step outcomes drawn per sampling call.
    #[inline]
    pub fn n_outcomes(&self) -> usize {
        self.n_steps * self.n_simulations
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::InvalidParameter`] if:
    /// - `n_steps` is 0 or greater than [`MAX_STEPS`]
    /// - `n_simulations` is 0 or greater than [`MAX_SIMULATIONS`]
    /// - `n_steps * n_simulations` exceeds [`MAX_OUTCOMES`]
    pub fn validate(&self) -> Result<(), WalkError> {
        validate_grid(self.n_steps, self.n_simulations)
    }
}

pub(crate) fn validate_steps(n_steps: usize) -> Result<(), WalkError> {
    if n_steps == 0 || n_steps > MAX_STEPS {
        return Err(WalkError::invalid(
            "n_steps",
            format!("{} must be in range [1, {}]", n_steps, MAX_STEPS),
        ));
    }
    Ok(())
}

pub(crate) fn validate_simulations(n_simulations: usize) -> Result<(), WalkError> {
    if n_simulations == 0 || n_simulations > MAX_SIMULATIONS {
        return Err(WalkError::invalid(
            "n_simulations",
            format!("{} must be in range [1, {}]", n_simulations, MAX_SIMULATIONS),
        ));
    }
    Ok(())
}

pub(crate) fn validate_grid(n_steps: usize, n_simulations: usize) -> Result<(), WalkError> {
    validate_steps(n_steps)?;
    validate_simulations(n_simulations)?;

    match n_steps.checked_mul(n_simulations) {
        Some(n_outcomes) if n_outcomes <= MAX_OUTCOMES => Ok(()),
        _ => Err(WalkError::invalid(
            "n_simulations",
            format!(
                "{} x {} steps exceeds the limit of {} outcomes",
                n_simulations, n_steps, MAX_OUTCOMES
            ),
        )),
    }
}

/// Builder for [`SimulationConfig`].
///
/// Provides a fluent API with validation at build time.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_steps: Option<usize>,
    n_simulations: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of steps per path, in [1, 10_000].
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the number of paths, in [1, 10_000_000].
    #[inline]
    pub fn n_simulations(mut self, n_simulations: usize) -> Self {
        self.n_simulations = Some(n_simulations);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::InvalidParameter`] if either count is missing
    /// or out of range.
    pub fn build(self) -> Result<SimulationConfig, WalkError> {
        let n_steps = self
            .n_steps
            .ok_or_else(|| WalkError::invalid("n_steps", "must be specified"))?;

        let n_simulations = self
            .n_simulations
            .ok_or_else(|| WalkError::invalid("n_simulations", "must be specified"))?;

        let config = SimulationConfig {
            n_steps,
            n_simulations,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
