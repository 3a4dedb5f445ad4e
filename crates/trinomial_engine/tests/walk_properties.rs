//! End-to-end properties of sampled trinomial walks.
//!
//! # Test Categories
//!
//! 1. **Structure**: shape, origin column, unit increments
//! 2. **Deterministic triples**: all-up and all-down walks are exact
//! 3. **Convergence**: empirical moments agree with theory for m >= 5000
//! 4. **Validation**: malformed inputs are rejected before sampling

use approx::assert_relative_eq;
use proptest::prelude::*;
use trinomial_engine::analysis::{ConvergenceReport, LatticeGrid, MonteCarloAnalysis, TerminalSummary};
use trinomial_engine::mc::PathSampler;
use trinomial_engine::{generate_paths, theoretical_stats, ProbabilityTriple, TheoreticalStats, WalkError};

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_shape_and_origin() {
    let paths = generate_paths(30, [0.4, 0.2, 0.4], 250).unwrap();

    assert_eq!(paths.shape(), (250, 31));
    assert!(paths.column(0).iter().all(|&x| x == 0.0));
}

#[test]
fn test_increments_are_unit_steps() {
    let paths = generate_paths(50, [0.3, 0.3, 0.4], 200).unwrap();

    for row in paths.rows() {
        for pair in row.windows(2) {
            let delta = pair[1] - pair[0];
            assert!(delta == 1.0 || delta == 0.0 || delta == -1.0, "bad increment {}", delta);
        }
    }
}

#[test]
fn test_single_path_stays_on_lattice() {
    let probs = ProbabilityTriple::from_percentages(50, 10).unwrap();
    let path = PathSampler::from_seed(3).sample_single_path(25, &probs).unwrap();
    let grid = LatticeGrid::new(25).unwrap();

    assert_eq!(path.len(), 26);
    assert!(grid.contains_path(&path));
}

// ============================================================================
// Deterministic triples
// ============================================================================

#[test]
fn test_all_up_rows_are_exact() {
    let paths = generate_paths(10, [1.0, 0.0, 0.0], 7).unwrap();
    let expected: Vec<f64> = (0..=10).map(|j| j as f64).collect();

    assert!(paths.rows().all(|row| row == expected.as_slice()));

    let stats = theoretical_stats(10, [1.0, 0.0, 0.0]).unwrap();
    assert_eq!(stats.as_pair(), (10.0, 0.0));
}

#[test]
fn test_all_down_rows_are_exact() {
    let paths = generate_paths(10, [0.0, 0.0, 1.0], 7).unwrap();
    let expected: Vec<f64> = (0..=10).map(|j| -(j as f64)).collect();

    assert!(paths.rows().all(|row| row == expected.as_slice()));
}

#[test]
fn test_all_neutral_rows_stay_at_origin() {
    let paths = generate_paths(10, [0.0, 1.0, 0.0], 7).unwrap();
    assert!(paths.as_slice().iter().all(|&x| x == 0.0));
}

// ============================================================================
// Theory
// ============================================================================

#[test]
fn test_reference_values() {
    let symmetric = theoretical_stats(30, [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0]).unwrap();
    assert_relative_eq!(symmetric.mu_total(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(symmetric.sigma_total(), 20.0_f64.sqrt(), epsilon = 1e-9);

    let skewed = theoretical_stats(1, [0.5, 0.3, 0.2]).unwrap();
    assert_relative_eq!(skewed.mu_total(), 0.3, epsilon = 1e-12);
    assert_relative_eq!(skewed.sigma_total(), 0.61_f64.sqrt(), epsilon = 1e-12);
}

// ============================================================================
// Convergence
// ============================================================================

fn assert_converges(probs: [f64; 3], n_steps: usize, seed: u64) {
    let triple = ProbabilityTriple::try_from(probs).unwrap();
    let stats = TheoreticalStats::from_triple(&triple, n_steps);
    let paths = PathSampler::from_seed(seed).sample(n_steps, &triple, 5000).unwrap();

    let summary = TerminalSummary::from_paths(&paths).unwrap();
    let report = ConvergenceReport::new(&summary, &stats);

    assert!(
        report.is_within(5.0),
        "probs {:?}: mean {} vs {} (se {}), std {} vs {} (se {})",
        probs,
        report.empirical_mean,
        report.theoretical_mean,
        report.se_mean,
        report.empirical_std,
        report.theoretical_std,
        report.se_std
    );
}

#[test]
fn test_convergence_symmetric() {
    assert_converges([1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0], 30, 42);
}

#[test]
fn test_convergence_skewed() {
    assert_converges([0.5, 0.3, 0.2], 100, 7);
}

#[test]
fn test_convergence_mostly_neutral() {
    assert_converges([0.05, 0.9, 0.05], 60, 2024);
}

#[test]
fn test_analysis_of_unseeded_run() {
    let probs = [0.25, 0.5, 0.25];
    let paths = generate_paths(40, probs, 5000).unwrap();
    let stats = theoretical_stats(40, probs).unwrap();

    let analysis = MonteCarloAnalysis::from_paths(&paths, &stats).unwrap();

    assert!(analysis.convergence.is_within(6.0));
    let area: f64 = analysis
        .histogram
        .densities
        .iter()
        .map(|d| d * analysis.histogram.bin_width())
        .sum();
    assert_relative_eq!(area, 1.0, epsilon = 1e-9);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_rejects_bad_probabilities() {
    let err = generate_paths(10, [0.5, 0.6, 0.1], 10).unwrap_err();
    assert!(matches!(err, WalkError::InvalidParameter { .. }));

    assert!(generate_paths(10, [1.2, -0.1, -0.1], 10).is_err());
    assert!(theoretical_stats(10, [0.5, 0.6, 0.1]).is_err());
}

#[test]
fn test_rejects_bad_counts() {
    assert!(matches!(
        generate_paths(0, [1.0, 0.0, 0.0], 10),
        Err(WalkError::InvalidParameter { name: "n_steps", .. })
    ));
    assert!(matches!(
        generate_paths(10, [1.0, 0.0, 0.0], -1),
        Err(WalkError::InvalidParameter { name: "n_simulations", .. })
    ));
    assert!(theoretical_stats(-3, [1.0, 0.0, 0.0]).is_err());
}

// ============================================================================
// Property-Based Tests
// ============================================================================

fn arb_probs() -> impl Strategy<Value = ProbabilityTriple> {
    (0.0..1.0f64, 0.0..1.0f64, 0.0..1.0f64)
        .prop_filter("non-zero weight", |(a, b, c)| a + b + c > 1e-3)
        .prop_map(|(a, b, c)| ProbabilityTriple::normalised(a, b, c).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_paths_well_formed(
        probs in arb_probs(),
        n_steps in 1usize..60,
        n_simulations in 1usize..40,
        seed in any::<u64>(),
    ) {
        let paths = PathSampler::from_seed(seed).sample(n_steps, &probs, n_simulations).unwrap();

        prop_assert_eq!(paths.shape(), (n_simulations, n_steps + 1));
        for row in paths.rows() {
            prop_assert_eq!(row[0], 0.0);
            for (step, &x) in row.iter().enumerate() {
                prop_assert!(x.abs() <= step as f64);
            }
            for pair in row.windows(2) {
                let delta = pair[1] - pair[0];
                prop_assert!(delta == -1.0 || delta == 0.0 || delta == 1.0, "bad increment {}", delta);
            }
        }
    }

    #[test]
    fn prop_seed_reproducible(probs in arb_probs(), seed in any::<u64>()) {
        let a = PathSampler::from_seed(seed).sample(15, &probs, 8).unwrap();
        let b = PathSampler::from_seed(seed).sample(15, &probs, 8).unwrap();
        prop_assert_eq!(a, b);
    }
}
