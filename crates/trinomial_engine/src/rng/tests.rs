//! Unit tests for the RNG module.
//!
//! This module contains tests verifying:
//! - PRNG seed reproducibility
//! - Uniform range and batch fills
//! - Categorical frequencies of the single-step distribution
//! - Statistical properties via property-based testing

use super::*;
use proptest::prelude::*;
use trinomial_core::{ProbabilityTriple, StepOutcome};

/// Verifies that the same seed produces identical sequences.
#[test]
fn test_seed_reproducibility() {
    let mut rng1 = WalkRng::from_seed(12345);
    let mut rng2 = WalkRng::from_seed(12345);

    for _ in 0..100 {
        assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
    }
    assert_eq!(rng1.seed(), 12345);
}

/// Verifies that an entropy-seeded generator replays from its recorded seed.
#[test]
fn test_entropy_seed_is_replayable() {
    let mut rng = WalkRng::from_entropy();
    let mut replay = WalkRng::from_seed(rng.seed());

    for _ in 0..10 {
        assert_eq!(rng.gen_uniform(), replay.gen_uniform());
    }
}

/// Verifies that batch fill values are in [0, 1).
#[test]
fn test_fill_uniform() {
    let mut rng = WalkRng::from_seed(42);
    let mut buffer = vec![-1.0; 1000];

    rng.fill_uniform(&mut buffer);

    for &value in &buffer {
        assert!((0.0..1.0).contains(&value));
    }
}

/// Verifies that empty buffer is handled gracefully.
#[test]
fn test_empty_buffer() {
    let mut rng = WalkRng::from_seed(42);
    let mut empty: Vec<f64> = vec![];
    rng.fill_uniform(&mut empty);
}

/// Verifies that zero-weight outcomes are never drawn.
#[test]
fn test_step_distribution_degenerate() {
    let mut rng = WalkRng::from_seed(7);
    let dist = StepDistribution::new(&ProbabilityTriple::new(0.0, 0.0, 1.0).unwrap()).unwrap();

    for _ in 0..1000 {
        assert_eq!(rng.gen_outcome(&dist), StepOutcome::Down);
    }
}

/// Verifies categorical frequencies converge to the configured weights.
#[test]
fn test_step_distribution_frequencies() {
    let probs = ProbabilityTriple::new(0.5, 0.3, 0.2).unwrap();
    let dist = StepDistribution::new(&probs).unwrap();
    let mut rng = WalkRng::from_seed(2024);

    let n = 100_000;
    let mut counts = [0usize; 3];
    for _ in 0..n {
        match rng.gen_outcome(&dist) {
            StepOutcome::Up => counts[0] += 1,
            StepOutcome::Neutral => counts[1] += 1,
            StepOutcome::Down => counts[2] += 1,
        }
    }

    for (count, p) in counts.iter().zip(probs.as_array()) {
        let freq = *count as f64 / n as f64;
        // 5 binomial standard errors
        let tolerance = 5.0 * (p * (1.0 - p) / n as f64).sqrt();
        assert!(
            (freq - p).abs() < tolerance,
            "frequency {} too far from {}",
            freq,
            p
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property test: All uniform values must be in [0, 1) for any seed.
    #[test]
    fn prop_uniform_in_range(seed in any::<u64>(), size in 1..10000usize) {
        let mut rng = WalkRng::from_seed(seed);
        let mut buffer = vec![0.0; size];
        rng.fill_uniform(&mut buffer);

        for (i, &v) in buffer.iter().enumerate() {
            prop_assert!(
                (0.0..1.0).contains(&v),
                "Uniform value at index {} is out of range: {} (seed={})",
                i, v, seed
            );
        }
    }

    /// Property test: Uniform mean should be approximately 1/2.
    #[test]
    fn prop_uniform_mean(seed in any::<u64>()) {
        let mut rng = WalkRng::from_seed(seed);
        let sample_size = 100_000;
        let mut buffer = vec![0.0; sample_size];
        rng.fill_uniform(&mut buffer);

        let mean: f64 = buffer.iter().sum::<f64>() / sample_size as f64;
        // sd of uniform mean = sqrt(1/12 / n) ≈ 0.0009
        prop_assert!((mean - 0.5).abs() < 0.006, "mean = {} (seed={})", mean, seed);
    }
}
