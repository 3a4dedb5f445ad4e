//! Agreement between sampled and theoretical terminal moments.

use trinomial_core::distributions::norm_cdf;
use trinomial_core::TheoreticalStats;

use super::summary::TerminalSummary;

/// Empirical against theoretical terminal mean and standard deviation.
///
/// For `m` simulations the empirical mean has standard error
/// `sigma_total / sqrt(m)`; the empirical standard deviation uses the
/// delta-method error from [`TheoreticalStats::standard_error_of_std`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConvergenceReport {
    /// Number of simulations.
    pub n_simulations: usize,
    /// Sampled mean of the terminal column.
    pub empirical_mean: f64,
    /// `mu_total`.
    pub theoretical_mean: f64,
    /// Sampled population standard deviation of the terminal column.
    pub empirical_std: f64,
    /// `sigma_total`.
    pub theoretical_std: f64,
    /// Standard error of the empirical mean.
    pub se_mean: f64,
    /// Standard error of the empirical standard deviation.
    pub se_std: f64,
}

impl ConvergenceReport {
    /// Compares a terminal summary with the closed-form moments.
    pub fn new(summary: &TerminalSummary, stats: &TheoreticalStats) -> Self {
        Self {
            n_simulations: summary.count,
            empirical_mean: summary.mean,
            theoretical_mean: stats.mu_total(),
            empirical_std: summary.std_dev,
            theoretical_std: stats.sigma_total(),
            se_mean: stats.standard_error_of_mean(summary.count),
            se_std: stats.standard_error_of_std(summary.count),
        }
    }

    /// Signed mean error in standard errors, `None` for a degenerate walk.
    pub fn mean_z(&self) -> Option<f64> {
        (self.se_mean > 0.0).then(|| (self.empirical_mean - self.theoretical_mean) / self.se_mean)
    }

    /// Two-sided p-value of the mean error under the normal approximation.
    pub fn mean_p_value(&self) -> Option<f64> {
        self.mean_z().map(|z| 2.0 * (1.0 - norm_cdf(z.abs())))
    }

    /// Signed standard deviation error in standard errors.
    pub fn std_z(&self) -> Option<f64> {
        (self.se_std > 0.0).then(|| (self.empirical_std - self.theoretical_std) / self.se_std)
    }

    /// Returns `true` if both mean and standard deviation lie within `k`
    /// standard errors of theory.
    ///
    /// A degenerate walk has zero standard errors; it passes only on exact
    /// agreement (up to rounding).
    pub fn is_within(&self, k: f64) -> bool {
        let tolerance = 1e-9;
        let mean_ok = (self.empirical_mean - self.theoretical_mean).abs()
            <= k * self.se_mean + tolerance;
        let std_ok =
            (self.empirical_std - self.theoretical_std).abs() <= k * self.se_std + tolerance;
        mean_ok && std_ok
    }
}
