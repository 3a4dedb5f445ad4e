//! Stats command implementation
//!
//! Reports the closed-form mean and standard deviation of the terminal
//! position without sampling.

use serde::Serialize;
use std::io::Write;
use tracing::info;
use trinomial_core::{ProbabilityTriple, TheoreticalStats};

use super::{emit, fmt_f64, fmt_percentages, write_table};
use crate::config::CliConfig;
use crate::Result;

#[derive(Debug, Serialize)]
struct StatsReport {
    probabilities: ProbabilityTriple,
    stats: TheoreticalStats,
}

/// Run the stats command
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    config.validate()?;
    let walk = &config.walk;
    let probs = walk.probabilities()?;
    let stats = TheoreticalStats::from_triple(&probs, walk.steps);

    info!(
        steps = walk.steps,
        mu_total = stats.mu_total(),
        sigma_total = stats.sigma_total(),
        "computed theoretical statistics"
    );

    let report = StatsReport {
        probabilities: probs,
        stats,
    };

    emit(out, config.format, &report, |out| {
        write_table(
            out,
            "Theoretical terminal distribution",
            &[
                ("Steps", walk.steps.to_string()),
                ("Up / Neutral / Down", fmt_percentages(walk.up, walk.neutral, walk.down())),
                ("Step mean", fmt_f64(stats.mu_step())),
                ("Step variance", fmt_f64(stats.var_step())),
                ("Expected position", fmt_f64(stats.mu_total())),
                ("Volatility (sigma)", fmt_f64(stats.sigma_total())),
            ],
        )
    })
}
