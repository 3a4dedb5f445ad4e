//! Value types shared by every layer.
//!
//! This module provides:
//! - `probability`: The validated `(p_up, p_neutral, p_down)` triple and the
//!   three step outcomes it weights
//! - `error`: Structured error type for parameter validation and numeric
//!   degeneracy
//!
//! # Re-exports
//!
//! - [`ProbabilityTriple`], [`StepOutcome`], [`PROBABILITY_TOLERANCE`] from `probability`
//! - [`WalkError`], [`Result`] from `error`

pub mod error;
pub mod probability;

pub use error::{Result, WalkError};
pub use probability::{ProbabilityTriple, StepOutcome, PROBABILITY_TOLERANCE};
