//! Closed-form moments of the trinomial walk.
//!
//! Steps are independent and identically distributed, so the terminal
//! position after `n` steps has
//!
//! ```text
//! mu_total    = n · mu_step
//! sigma_total = sqrt(n · var_step)
//! ```
//!
//! where, for a single step,
//!
//! ```text
//! mu_step  = (+1)·p_up + 0·p_neutral + (-1)·p_down
//! var_step = p_up·(1 - mu_step)² + p_neutral·(0 - mu_step)² + p_down·(-1 - mu_step)²
//! ```
//!
//! Nothing here samples; identical inputs always give identical outputs.

use crate::distributions::normal_pdf;
use crate::types::{ProbabilityTriple, Result, StepOutcome, WalkError};

/// Mean of a single step.
#[inline]
pub fn step_mean(probs: &ProbabilityTriple) -> f64 {
    StepOutcome::ALL
        .iter()
        .map(|&outcome| outcome.increment_f64() * probs.probability(outcome))
        .sum()
}

/// Variance of a single step, clamped to be non-negative.
#[inline]
pub fn step_variance(probs: &ProbabilityTriple) -> f64 {
    let mu = step_mean(probs);
    let var: f64 = StepOutcome::ALL
        .iter()
        .map(|&outcome| {
            let deviation = outcome.increment_f64() - mu;
            probs.probability(outcome) * deviation * deviation
        })
        .sum();
    var.max(0.0)
}

/// Fourth central moment of a single step.
#[inline]
pub fn step_fourth_moment(probs: &ProbabilityTriple) -> f64 {
    let mu = step_mean(probs);
    StepOutcome::ALL
        .iter()
        .map(|&outcome| probs.probability(outcome) * (outcome.increment_f64() - mu).powi(4))
        .sum()
}

/// Theoretical mean and standard deviation of the terminal position.
///
/// # Examples
///
/// ```rust
/// use trinomial_core::moments::TheoreticalStats;
/// use trinomial_core::types::ProbabilityTriple;
///
/// let stats = TheoreticalStats::from_triple(&ProbabilityTriple::uniform(), 30);
/// assert!(stats.mu_total().abs() < 1e-12);
/// assert!((stats.sigma_total() - 20.0_f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TheoreticalStats {
    n_steps: usize,
    mu_step: f64,
    var_step: f64,
    mu_total: f64,
    sigma_total: f64,
    m4_total: f64,
}

impl TheoreticalStats {
    /// Derives the terminal moments for `n_steps` steps.
    ///
    /// `n_steps = 0` describes a walk that never leaves the origin and
    /// yields `(0, 0)`.
    pub fn from_triple(probs: &ProbabilityTriple, n_steps: usize) -> Self {
        let mu_step = step_mean(probs);
        let var_step = step_variance(probs);
        let n = n_steps as f64;

        // Fourth central moment of a sum of n i.i.d. steps
        let m4_total = n * step_fourth_moment(probs)
            + 3.0 * n * (n - 1.0).max(0.0) * var_step * var_step;

        Self {
            n_steps,
            mu_step,
            var_step,
            mu_total: n * mu_step,
            sigma_total: (n * var_step).max(0.0).sqrt(),
            m4_total,
        }
    }

    /// Number of steps the moments refer to.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Single-step mean.
    #[inline]
    pub fn mu_step(&self) -> f64 {
        self.mu_step
    }

    /// Single-step variance.
    #[inline]
    pub fn var_step(&self) -> f64 {
        self.var_step
    }

    /// Expected terminal position.
    #[inline]
    pub fn mu_total(&self) -> f64 {
        self.mu_total
    }

    /// Standard deviation of the terminal position. Always `>= 0`.
    #[inline]
    pub fn sigma_total(&self) -> f64 {
        self.sigma_total
    }

    /// Fourth central moment of the terminal position.
    #[inline]
    pub fn fourth_central_moment(&self) -> f64 {
        self.m4_total
    }

    /// `(mu_total, sigma_total)`.
    #[inline]
    pub fn as_pair(&self) -> (f64, f64) {
        (self.mu_total, self.sigma_total)
    }

    /// Returns `true` when the terminal position has no spread.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.sigma_total == 0.0
    }

    /// Standardises a terminal value.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::NumericDegeneracy`] when `sigma_total` is zero.
    pub fn z_score(&self, x: f64) -> Result<f64> {
        if self.is_degenerate() {
            return Err(WalkError::degenerate(format!(
                "cannot standardise {} against a zero sigma_total",
                x
            )));
        }
        Ok((x - self.mu_total) / self.sigma_total)
    }

    /// Normal approximation density at `x`, or `None` for a degenerate walk.
    #[inline]
    pub fn normal_density(&self, x: f64) -> Option<f64> {
        normal_pdf(x, self.mu_total, self.sigma_total)
    }

    /// Standard error of the empirical mean over `n_simulations` paths.
    #[inline]
    pub fn standard_error_of_mean(&self, n_simulations: usize) -> f64 {
        self.sigma_total / (n_simulations.max(1) as f64).sqrt()
    }

    /// Large-sample standard error of the empirical standard deviation over
    /// `n_simulations` paths.
    ///
    /// Delta method on the sample variance: `sqrt((m4 - sigma⁴) / (4 sigma² m))`.
    /// Zero for a degenerate walk.
    pub fn standard_error_of_std(&self, n_simulations: usize) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let variance = self.sigma_total * self.sigma_total;
        let excess = (self.m4_total - variance * variance).max(0.0);
        (excess / (4.0 * variance * n_simulations.max(1) as f64)).sqrt()
    }
}

/// Theoretical terminal statistics for untyped inputs.
///
/// Validates the counts and probabilities the way a front end receives them
/// and returns `(mu_total, sigma_total)` wrapped in [`TheoreticalStats`].
///
/// # Errors
///
/// Returns [`WalkError::InvalidParameter`] if `n_steps <= 0` or `probs` is
/// not a valid probability triple.
///
/// # Examples
///
/// ```rust
/// use trinomial_core::theoretical_stats;
///
/// let stats = theoretical_stats(30, [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0]).unwrap();
/// assert!((stats.sigma_total() - 4.472).abs() < 1e-3);
///
/// assert!(theoretical_stats(0, [1.0, 0.0, 0.0]).is_err());
/// ```
pub fn theoretical_stats(n_steps: i64, probs: [f64; 3]) -> Result<TheoreticalStats> {
    let n_steps = positive_count("n_steps", n_steps)?;
    let probs = ProbabilityTriple::try_from(probs)?;
    Ok(TheoreticalStats::from_triple(&probs, n_steps))
}

/// Converts a signed count into a strictly positive `usize`.
///
/// # Errors
///
/// Returns [`WalkError::InvalidParameter`] if `value <= 0` or it does not
/// fit in `usize`.
pub fn positive_count(name: &'static str, value: i64) -> Result<usize> {
    if value <= 0 {
        return Err(WalkError::invalid(
            name,
            format!("must be positive, got {}", value),
        ));
    }
    usize::try_from(value)
        .map_err(|_| WalkError::invalid(name, format!("{} does not fit in usize", value)))
}
