//! One-shot analysis of a sampled path matrix.

use tracing::debug;
use trinomial_core::{TheoreticalStats, WalkError};

use super::convergence::ConvergenceReport;
use super::histogram::Histogram;
use super::overlay::{normal_overlay, DensityPoint, OVERLAY_POINTS};
use super::summary::{mean_path, TerminalSummary};
use crate::mc::PathMatrix;

/// Number of individual paths offered for a spaghetti plot.
pub const MAX_DISPLAY_PATHS: usize = 150;

/// Everything a front end needs to present one Monte Carlo run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonteCarloAnalysis {
    /// Closed-form moments the run is compared against.
    pub theoretical: TheoreticalStats,
    /// Terminal-column KPIs.
    pub terminal: TerminalSummary,
    /// Empirical mean at every step.
    pub mean_path: Vec<f64>,
    /// Terminal distribution.
    pub histogram: Histogram,
    /// Normal curve over the histogram range, absent for a degenerate walk.
    pub overlay: Option<Vec<DensityPoint>>,
    /// Empirical against theoretical moments.
    pub convergence: ConvergenceReport,
}

impl MonteCarloAnalysis {
    /// Analyses `paths` against `stats`.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::InvalidParameter`] when the matrix and the
    /// moments disagree on the number of steps.
    pub fn from_paths(paths: &PathMatrix, stats: &TheoreticalStats) -> Result<Self, WalkError> {
        if paths.n_steps() != stats.n_steps() {
            return Err(WalkError::invalid(
                "n_steps",
                format!(
                    "paths have {} steps but moments describe {}",
                    paths.n_steps(),
                    stats.n_steps()
                ),
            ));
        }

        let terminal_values = paths.terminal_values();
        let terminal = TerminalSummary::from_values(&terminal_values).ok_or_else(|| {
            WalkError::invalid("n_simulations", "no simulated paths to analyse".to_string())
        })?;
        let histogram = Histogram::auto(&terminal_values).ok_or_else(|| {
            WalkError::degenerate("terminal values are not finite".to_string())
        })?;

        let lo = histogram.edges[0];
        let hi = histogram.edges[histogram.n_bins()];
        let overlay = normal_overlay(stats, lo, hi, OVERLAY_POINTS);
        let convergence = ConvergenceReport::new(&terminal, stats);

        debug!(
            n_simulations = terminal.count,
            n_bins = histogram.n_bins(),
            mean = terminal.mean,
            std_dev = terminal.std_dev,
            "analysed terminal distribution"
        );

        Ok(Self {
            theoretical: *stats,
            terminal,
            mean_path: mean_path(paths),
            histogram,
            overlay,
            convergence,
        })
    }

    /// The first [`MAX_DISPLAY_PATHS`] rows of `paths`.
    pub fn display_rows(paths: &PathMatrix) -> impl Iterator<Item = &[f64]> {
        paths.rows().take(MAX_DISPLAY_PATHS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::PathSampler;
    use approx::assert_relative_eq;
    use trinomial_core::ProbabilityTriple;

    #[test]
    fn test_analysis_bundle() {
        let probs = ProbabilityTriple::from_percentages(33, 33).unwrap();
        let stats = TheoreticalStats::from_triple(&probs, 20);
        let paths = PathSampler::from_seed(5).sample(20, &probs, 1000).unwrap();

        let analysis = MonteCarloAnalysis::from_paths(&paths, &stats).unwrap();

        assert_eq!(analysis.mean_path.len(), 21);
        assert_eq!(analysis.mean_path[0], 0.0);
        assert_eq!(analysis.histogram.total(), 1000);
        assert_eq!(analysis.overlay.as_ref().map(Vec::len), Some(OVERLAY_POINTS));
        assert_relative_eq!(analysis.terminal.mean, *analysis.mean_path.last().unwrap(), epsilon = 1e-9);
        assert_eq!(MonteCarloAnalysis::display_rows(&paths).count(), MAX_DISPLAY_PATHS);
    }

    #[test]
    fn test_degenerate_has_no_overlay() {
        let probs = ProbabilityTriple::new(1.0, 0.0, 0.0).unwrap();
        let stats = TheoreticalStats::from_triple(&probs, 8);
        let paths = PathSampler::from_seed(5).sample(8, &probs, 10).unwrap();

        let analysis = MonteCarloAnalysis::from_paths(&paths, &stats).unwrap();

        assert!(analysis.overlay.is_none());
        assert_eq!(analysis.histogram.n_bins(), 1);
        assert!(analysis.convergence.is_within(0.0));
        assert_eq!(MonteCarloAnalysis::display_rows(&paths).count(), 10);
    }

    #[test]
    fn test_step_mismatch_rejected() {
        let probs = ProbabilityTriple::uniform();
        let stats = TheoreticalStats::from_triple(&probs, 10);
        let paths = PathSampler::from_seed(5).sample(12, &probs, 10).unwrap();

        let err = MonteCarloAnalysis::from_paths(&paths, &stats).unwrap_err();
        assert!(err.is_invalid_parameter());
    }
}
