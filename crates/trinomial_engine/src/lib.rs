//! # trinomial_engine: Path Sampling for the Trinomial Random Walk
//!
//! ## Layer 3 Role
//!
//! trinomial_engine turns the probability model of `trinomial_core` into
//! simulated trajectories and the figures derived from them:
//! - Seeded or entropy-backed random number generation (`rng`)
//! - Bulk Monte Carlo path sampling with a reusable workspace (`mc`)
//! - Terminal KPIs, histograms and convergence checks (`analysis`)
//!
//! Errors are reported as `trinomial_core::WalkError`; sampling emits
//! `tracing` events at debug level.
//!
//! ## Usage Examples
//!
//! ```rust
//! use trinomial_engine::{generate_paths, theoretical_stats};
//!
//! let probs = [0.25, 0.5, 0.25];
//! let paths = generate_paths(30, probs, 2000).unwrap();
//! let stats = theoretical_stats(30, probs).unwrap();
//!
//! assert_eq!(paths.shape(), (2000, 31));
//! assert!(paths.rows().all(|row| row[0] == 0.0));
//! assert!((stats.sigma_total() - 15.0_f64.sqrt()).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for `PathMatrix`, `SimulationConfig` and the
//!   analysis results

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analysis;
pub mod mc;
pub mod rng;

pub use analysis::MonteCarloAnalysis;
pub use mc::{generate_paths, PathMatrix, PathSampler, SimulationConfig};
pub use trinomial_core::{theoretical_stats, ProbabilityTriple, TheoreticalStats, WalkError};
