//! # trinomial_core: Probability Model for the Trinomial Random Walk
//!
//! ## Layer 1 (Foundation) Role
//!
//! trinomial_core is the bottom layer of the workspace, providing:
//! - The validated step probability model (`types::probability`)
//! - Error types: `WalkError` (`types::error`)
//! - Closed-form moments of the terminal distribution (`moments`)
//! - Normal density helpers for theoretical overlays (`distributions`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other trinomial_* crates and no sampling
//! code. Everything here is a pure function of its inputs:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use trinomial_core::moments::TheoreticalStats;
//! use trinomial_core::types::ProbabilityTriple;
//!
//! let probs = ProbabilityTriple::new(0.5, 0.3, 0.2).unwrap();
//! let stats = TheoreticalStats::from_triple(&probs, 100);
//!
//! assert!((stats.mu_total() - 30.0).abs() < 1e-12);
//! assert!(stats.sigma_total() > 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `ProbabilityTriple`, `StepOutcome` and
//!   `TheoreticalStats`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod distributions;
pub mod moments;
pub mod types;

pub use moments::{theoretical_stats, TheoreticalStats};
pub use types::{ProbabilityTriple, StepOutcome, WalkError, PROBABILITY_TOLERANCE};
