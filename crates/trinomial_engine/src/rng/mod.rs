//! # Random Number Generation Infrastructure
//!
//! This module provides the random source for path sampling.
//!
//! ## Design
//!
//! - **Reproducibility**: Every generator carries a 64-bit seed. Entropy-seeded
//!   generators draw that seed once and record it, so any run can be replayed
//!   from its logged seed
//! - **Efficiency**: Zero-allocation batch operations via `&mut [f64]` slices
//! - **Ownership**: A generator is owned by exactly one sampler; nothing here
//!   is shared between calls
//!
//! ## Module Structure
//!
//! - `prng`: Seeded PRNG wrapper with batch uniform generation
//! - `step`: Categorical distribution over the three step outcomes
//!
//! ## Usage Example
//!
//! ```rust
//! use trinomial_engine::rng::{StepDistribution, WalkRng};
//! use trinomial_core::ProbabilityTriple;
//!
//! let mut rng = WalkRng::from_seed(12345);
//!
//! // Batch generation into pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_uniform(&mut buffer);
//!
//! // Single categorical draw
//! let dist = StepDistribution::new(&ProbabilityTriple::uniform()).unwrap();
//! let outcome = rng.gen_outcome(&dist);
//! ```

mod prng;
mod step;

pub use prng::WalkRng;
pub use step::StepDistribution;

#[cfg(test)]
mod tests;
