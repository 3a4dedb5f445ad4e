//! Analyse command implementation
//!
//! Runs a Monte Carlo batch and reports the terminal KPIs, the agreement
//! with theory and the terminal histogram.

use serde::Serialize;
use std::io::Write;
use tracing::info;
use trinomial_core::{ProbabilityTriple, TheoreticalStats};
use trinomial_engine::analysis::{Histogram, MonteCarloAnalysis, MAX_DISPLAY_PATHS};
use trinomial_engine::mc::PathSampler;

use super::{emit, fmt_f64, fmt_percentages, write_table};
use crate::config::CliConfig;
use crate::Result;

/// Widest histogram bar in characters.
const BAR_WIDTH: usize = 40;

#[derive(Debug, Serialize)]
struct AnalyseReport {
    seed: u64,
    probabilities: ProbabilityTriple,
    display_paths: usize,
    analysis: MonteCarloAnalysis,
}

/// Run the analyse command
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    config.validate()?;
    let walk = &config.walk;
    let probs = walk.probabilities()?;
    let sim_config = walk.simulation_config()?;

    let mut sampler = PathSampler::from_config(&sim_config);
    let paths = sampler.sample_with_config(&sim_config, &probs)?;
    let stats = TheoreticalStats::from_triple(&probs, walk.steps);
    let analysis = MonteCarloAnalysis::from_paths(&paths, &stats)?;

    info!(
        seed = sampler.seed(),
        steps = walk.steps,
        simulations = walk.simulations,
        mean = analysis.terminal.mean,
        "completed Monte Carlo analysis"
    );

    let report = AnalyseReport {
        seed: sampler.seed(),
        probabilities: probs,
        display_paths: MonteCarloAnalysis::display_rows(&paths).count(),
        analysis,
    };

    emit(out, config.format, &report, |out| {
        let analysis = &report.analysis;
        let convergence = &analysis.convergence;
        let mean_z = convergence
            .mean_z()
            .map_or_else(|| "n/a".to_string(), |z| format!("{:+.2}", z));

        write_table(
            out,
            "Consolidated results",
            &[
                ("Seed", report.seed.to_string()),
                ("Steps x Simulations", format!("{} x {}", walk.steps, walk.simulations)),
                ("Up / Neutral / Down", fmt_percentages(walk.up, walk.neutral, walk.down())),
                ("Realised mean", fmt_f64(analysis.terminal.mean)),
                ("Theoretical mean", fmt_f64(convergence.theoretical_mean)),
                ("Volatility (realised)", fmt_f64(analysis.terminal.std_dev)),
                ("Volatility (theoretical)", fmt_f64(convergence.theoretical_std)),
                ("Maximum reached", fmt_f64(analysis.terminal.max)),
                ("SE of mean", fmt_f64(convergence.se_mean)),
                ("Mean error (SE units)", mean_z),
                ("Within 3 SE", convergence.is_within(3.0).to_string()),
                ("Paths shown", format!("{} of {}", report.display_paths, MAX_DISPLAY_PATHS)),
            ],
        )?;

        write_histogram(out, &analysis.histogram)
    })
}

fn write_histogram<W: Write>(out: &mut W, histogram: &Histogram) -> Result<()> {
    let peak = histogram.counts.iter().copied().max().unwrap_or(0).max(1);

    writeln!(out, "Terminal distribution ({} bins)", histogram.n_bins())?;
    for (i, &count) in histogram.counts.iter().enumerate() {
        let bar = "#".repeat(count * BAR_WIDTH / peak);
        writeln!(
            out,
            "[{:>8.2}, {:>8.2}) {:>7} {:.4} {}",
            histogram.edges[i],
            histogram.edges[i + 1],
            count,
            histogram.densities[i],
            bar
        )?;
    }
    Ok(())
}
