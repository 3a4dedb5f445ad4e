//! Normal approximation curve for density plots.

use trinomial_core::TheoreticalStats;

/// Default number of points on an overlay curve.
pub const OVERLAY_POINTS: usize = 100;

/// One point of the overlay curve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DensityPoint {
    /// Terminal level.
    pub level: f64,
    /// Normal density `N(mu_total, sigma_total²)` at `level`.
    pub density: f64,
}

/// Samples the theoretical normal density at `points` evenly spaced levels
/// in `[lo, hi]`, endpoints included.
///
/// Returns `None` when the walk is degenerate (`sigma_total = 0`), the
/// range is not finite or `points = 0`. A single point is placed at `lo`.
pub fn normal_overlay(
    stats: &TheoreticalStats,
    lo: f64,
    hi: f64,
    points: usize,
) -> Option<Vec<DensityPoint>> {
    if stats.is_degenerate() || points == 0 || !lo.is_finite() || !hi.is_finite() {
        return None;
    }

    let step = if points > 1 {
        (hi - lo) / (points - 1) as f64
    } else {
        0.0
    };

    (0..points)
        .map(|i| {
            let level = lo + i as f64 * step;
            stats
                .normal_density(level)
                .map(|density| DensityPoint { level, density })
        })
        .collect()
}
