//! Path command implementation
//!
//! Samples a single trajectory. Short walks also report the lattice of
//! reachable levels the path was drawn on.

use serde::Serialize;
use std::io::Write;
use tracing::info;
use trinomial_engine::analysis::LatticeGrid;
use trinomial_engine::mc::PathSampler;

use super::{emit, fmt_percentages, write_table};
use crate::config::CliConfig;
use crate::Result;

#[derive(Debug, Serialize)]
struct PathReport {
    seed: u64,
    steps: usize,
    path: Vec<f64>,
    terminal: f64,
    highest: f64,
    lowest: f64,
    lattice_nodes: Option<usize>,
}

/// Run the path command
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    config.validate()?;
    let walk = &config.walk;
    let probs = walk.probabilities()?;

    let mut sampler = walk.seed.map_or_else(PathSampler::new, PathSampler::from_seed);
    let path = sampler.sample_single_path(walk.steps, &probs)?;
    let lattice = LatticeGrid::new(walk.steps);

    let terminal = path.last().copied().unwrap_or(0.0);
    let highest = path.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lowest = path.iter().copied().fold(f64::INFINITY, f64::min);

    info!(seed = sampler.seed(), steps = walk.steps, terminal, "sampled path");

    let report = PathReport {
        seed: sampler.seed(),
        steps: walk.steps,
        path,
        terminal,
        highest,
        lowest,
        lattice_nodes: lattice.map(|grid| grid.node_count()),
    };

    emit(out, config.format, &report, |out| {
        let lattice = match report.lattice_nodes {
            Some(nodes) => format!("{} nodes", nodes),
            None => "not drawn".to_string(),
        };
        write_table(
            out,
            "Single trajectory",
            &[
                ("Seed", report.seed.to_string()),
                ("Steps", report.steps.to_string()),
                ("Up / Neutral / Down", fmt_percentages(walk.up, walk.neutral, walk.down())),
                ("Final position", format!("{}", report.terminal)),
                ("Highest level", format!("{}", report.highest)),
                ("Lowest level", format!("{}", report.lowest)),
                ("Lattice", lattice),
            ],
        )?;

        let positions: Vec<String> = report.path.iter().map(|x| format!("{}", x)).collect();
        writeln!(out, "Path: {}", positions.join(" "))?;
        Ok(())
    })
}
