//! Path generation for the trinomial walk.
//!
//! Bulk generation maps a pre-filled `n_simulations × n_steps` buffer of
//! uniform variates to step outcomes by inverse CDF and accumulates them
//! with a running sum, in a single row-major pass:
//!
//! ```text
//! X[i][0]   = 0
//! X[i][j+1] = X[i][j] + inc(U[i][j])
//! inc(u)    = +1 if u < t_up, 0 if u < t_up_or_neutral, -1 otherwise
//! ```
//!
//! where `(t_up, t_up_or_neutral)` are the cumulative probabilities
//! rescaled by their sum ([`ProbabilityTriple::thresholds`]).

use trinomial_core::ProbabilityTriple;

use super::matrix::PathMatrix;
use super::workspace::PathWorkspace;
use crate::rng::{StepDistribution, WalkRng};

/// Generates paths from the uniform variates held in `workspace`.
///
/// The workspace logical size determines the matrix shape. The returned
/// matrix is freshly allocated and shares nothing with the workspace.
///
/// # Performance
///
/// - One allocation (the result)
/// - Thresholds computed once outside the loop
/// - Cache-friendly row-major traversal of both buffers
pub fn generate_walk_paths(workspace: &PathWorkspace, probs: &ProbabilityTriple) -> PathMatrix {
    let (n_simulations, n_steps) = workspace.size();
    let mut paths = PathMatrix::zeros(n_simulations, n_steps);
    let (up, up_or_neutral) = probs.thresholds();

    let uniforms = workspace.uniforms();
    let n_columns = n_steps + 1;

    for (path, draws) in paths
        .as_mut_slice()
        .chunks_exact_mut(n_columns)
        .zip(uniforms.chunks_exact(n_steps.max(1)))
    {
        let mut level = 0.0;
        for (slot, &u) in path[1..].iter_mut().zip(draws) {
            level += if u < up {
                1.0
            } else if u < up_or_neutral {
                0.0
            } else {
                -1.0
            };
            *slot = level;
        }
    }

    paths
}

/// Walks a single path one step at a time.
///
/// Returns `n_steps + 1` positions starting at the origin.
pub fn walk_single_path(rng: &mut WalkRng, dist: &StepDistribution, n_steps: usize) -> Vec<f64> {
    let mut path = Vec::with_capacity(n_steps + 1);
    path.push(0.0);

    let mut level = 0.0;
    for _ in 0..n_steps {
        level += rng.gen_outcome(dist).increment_f64();
        path.push(level);
    }

    path
}
