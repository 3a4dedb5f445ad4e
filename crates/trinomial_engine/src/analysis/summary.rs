//! Empirical summaries of sampled paths.

use crate::mc::PathMatrix;

/// Descriptive statistics of a sample of terminal positions.
///
/// `std_dev` is the population standard deviation (divides by `count`).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TerminalSummary {
    /// Number of values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl TerminalSummary {
    /// Summarises `values`, or `None` when empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n;
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });

        Some(Self {
            count: values.len(),
            mean,
            std_dev: variance.max(0.0).sqrt(),
            min,
            max,
        })
    }

    /// Summarises the final column of `paths`.
    pub fn from_paths(paths: &PathMatrix) -> Option<Self> {
        Self::from_values(&paths.terminal_values())
    }
}

/// Empirical mean position at every step.
///
/// Returns `n_steps + 1` values; the first is always 0.
pub fn mean_path(paths: &PathMatrix) -> Vec<f64> {
    let mut sums = vec![0.0; paths.n_columns()];
    for row in paths.rows() {
        for (sum, &x) in sums.iter_mut().zip(row) {
            *sum += x;
        }
    }

    let n = paths.n_simulations().max(1) as f64;
    sums.iter_mut().for_each(|sum| *sum /= n);
    sums
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::PathSampler;
    use approx::assert_relative_eq;
    use trinomial_core::ProbabilityTriple;

    #[test]
    fn test_summary_known_values() {
        let summary = TerminalSummary::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(summary.count, 8);
        assert_relative_eq!(summary.mean, 5.0);
        assert_relative_eq!(summary.std_dev, 2.0);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 9.0);
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(TerminalSummary::from_values(&[]), None);
    }

    #[test]
    fn test_mean_path_deterministic_down() {
        let probs = ProbabilityTriple::new(0.0, 0.0, 1.0).unwrap();
        let paths = PathSampler::from_seed(1).sample(4, &probs, 25).unwrap();

        assert_eq!(mean_path(&paths), vec![0.0, -1.0, -2.0, -3.0, -4.0]);

        let summary = TerminalSummary::from_paths(&paths).unwrap();
        assert_eq!(summary.mean, -4.0);
        assert_eq!(summary.std_dev, 0.0);
    }
}
