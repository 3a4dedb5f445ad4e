//! Post-processing of sampled paths.
//!
//! Turns a [`PathMatrix`](crate::mc::PathMatrix) into the figures a front
//! end reports: terminal KPIs, the mean path, a density histogram with a
//! normal overlay, a convergence check and the lattice behind short walks.
//! Nothing here renders or samples.
//!
//! # Examples
//!
//! ```rust
//! use trinomial_engine::analysis::MonteCarloAnalysis;
//! use trinomial_engine::mc::PathSampler;
//! use trinomial_core::{ProbabilityTriple, TheoreticalStats};
//!
//! let probs = ProbabilityTriple::from_percentages(40, 20).unwrap();
//! let stats = TheoreticalStats::from_triple(&probs, 30);
//! let paths = PathSampler::from_seed(11).sample(30, &probs, 5000).unwrap();
//!
//! let analysis = MonteCarloAnalysis::from_paths(&paths, &stats).unwrap();
//! assert!(analysis.convergence.is_within(5.0));
//! ```

pub mod convergence;
pub mod histogram;
pub mod lattice;
pub mod overlay;
pub mod report;
pub mod summary;

pub use convergence::ConvergenceReport;
pub use histogram::Histogram;
pub use lattice::{LatticeGrid, LATTICE_MAX_STEPS};
pub use overlay::{normal_overlay, DensityPoint, OVERLAY_POINTS};
pub use report::{MonteCarloAnalysis, MAX_DISPLAY_PATHS};
pub use summary::{mean_path, TerminalSummary};
