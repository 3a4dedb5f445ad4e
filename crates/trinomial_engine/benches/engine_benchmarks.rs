//! Criterion benchmarks for trinomial_engine.
//!
//! Benchmarks cover:
//! - Uniform generation (per-draw vs batch)
//! - Bulk path sampling across simulation and step counts
//! - Single-path sampling
//! - Terminal analysis of a sampled matrix

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trinomial_core::{ProbabilityTriple, TheoreticalStats};
use trinomial_engine::analysis::MonteCarloAnalysis;
use trinomial_engine::mc::PathSampler;
use trinomial_engine::rng::WalkRng;

fn bench_rng_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_generation");

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("uniform_samples", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = WalkRng::from_seed(42);
                b.iter(|| {
                    let mut sum = 0.0;
                    for _ in 0..n {
                        sum += rng.gen_uniform();
                    }
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("uniform_batch", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = WalkRng::from_seed(42);
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    rng.fill_uniform(&mut buffer);
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }

    group.finish();
}

fn bench_path_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_sampling");
    group.sample_size(50);

    let probs = ProbabilityTriple::from_percentages(33, 33).unwrap();

    for n_simulations in [1_000, 10_000] {
        for n_steps in [100, 300] {
            let id = format!("{}x{}", n_simulations, n_steps);
            group.bench_with_input(
                BenchmarkId::new("sample", id),
                &(n_simulations, n_steps),
                |b, &(m, n)| {
                    let mut sampler = PathSampler::from_seed(42);
                    b.iter(|| black_box(sampler.sample(n, &probs, m).unwrap()));
                },
            );
        }
    }

    group.finish();
}

fn bench_single_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_path");
    let probs = ProbabilityTriple::uniform();

    for n_steps in [20, 300, 10_000] {
        group.bench_with_input(BenchmarkId::new("steps", n_steps), &n_steps, |b, &n| {
            let mut sampler = PathSampler::from_seed(42);
            b.iter(|| black_box(sampler.sample_single_path(n, &probs).unwrap()));
        });
    }

    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");

    let probs = ProbabilityTriple::from_percentages(40, 20).unwrap();
    for n_simulations in [1_000, 100_000] {
        let n_steps = 100;
        let stats = TheoreticalStats::from_triple(&probs, n_steps);
        let paths = PathSampler::from_seed(7)
            .sample(n_steps, &probs, n_simulations)
            .unwrap();

        group.bench_with_input(
            BenchmarkId::new("from_paths", n_simulations),
            &paths,
            |b, paths| b.iter(|| black_box(MonteCarloAnalysis::from_paths(paths, &stats).unwrap())),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_rng_generation,
    bench_path_sampling,
    bench_single_path,
    bench_analysis
);
criterion_main!(benches);
