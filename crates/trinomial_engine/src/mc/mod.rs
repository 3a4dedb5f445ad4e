//! Monte Carlo path sampling for the trinomial walk.
//!
//! # Architecture
//!
//! ```text
//! PathSampler
//! ├── SimulationConfig  (grid size and seed)
//! ├── PathWorkspace     (reusable uniform buffer)
//! ├── WalkRng           (random number generation)
//! └── Orchestration
//!     ├── fill_uniform()          one batch for the whole grid
//!     ├── generate_walk_paths()   inverse CDF + running sum
//!     └── walk_single_path()      step-by-step single path
//! ```
//!
//! # Examples
//!
//! ```rust
//! use trinomial_engine::mc::{PathSampler, SimulationConfig};
//! use trinomial_core::ProbabilityTriple;
//!
//! let config = SimulationConfig::builder()
//!     .n_steps(100)
//!     .n_simulations(10_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let probs = ProbabilityTriple::from_percentages(33, 33).unwrap();
//! let mut sampler = PathSampler::from_config(&config);
//! let paths = sampler.sample_with_config(&config, &probs).unwrap();
//!
//! assert_eq!(paths.shape(), (10_000, 101));
//! ```

pub mod config;
pub mod matrix;
pub mod paths;
pub mod sampler;
pub mod workspace;

pub use config::{
    SimulationConfig, SimulationConfigBuilder, MAX_OUTCOMES, MAX_SIMULATIONS, MAX_STEPS,
};
pub use matrix::PathMatrix;
pub use paths::{generate_walk_paths, walk_single_path};
pub use sampler::{generate_paths, PathSampler};
pub use workspace::PathWorkspace;
