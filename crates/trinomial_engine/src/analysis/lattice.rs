//! Reachable-level lattice behind a single path.
//!
//! After `i` steps a walk can only sit on levels `-i..=i`. For short walks
//! the full grid of reachable nodes is drawn under the path; longer walks
//! make the grid too dense to be useful.

use std::ops::RangeInclusive;

/// Largest step count for which a lattice is produced.
pub const LATTICE_MAX_STEPS: usize = 40;

/// The triangular grid of reachable `(step, level)` nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LatticeGrid {
    n_steps: usize,
}

impl LatticeGrid {
    /// Lattice for `n_steps` steps, or `None` above [`LATTICE_MAX_STEPS`].
    pub fn new(n_steps: usize) -> Option<Self> {
        (n_steps <= LATTICE_MAX_STEPS).then_some(Self { n_steps })
    }

    /// Number of steps covered.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Levels reachable after `step` steps, or an empty range past the end.
    pub fn levels_at(&self, step: usize) -> RangeInclusive<i64> {
        if step > self.n_steps {
            return RangeInclusive::new(1, 0);
        }
        let i = step as i64;
        -i..=i
    }

    /// Every node as `(step, level)`, step-major.
    pub fn nodes(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        (0..=self.n_steps).flat_map(move |step| self.levels_at(step).map(move |level| (step, level)))
    }

    /// Total node count, `(n_steps + 1)²`.
    #[inline]
    pub fn node_count(&self) -> usize {
        (self.n_steps + 1) * (self.n_steps + 1)
    }

    /// Returns `true` if every position of `path` lies on the lattice.
    pub fn contains_path(&self, path: &[f64]) -> bool {
        path.len() <= self.n_steps + 1
            && path.iter().enumerate().all(|(step, &x)| {
                x.fract() == 0.0 && self.levels_at(step).contains(&(x as i64))
            })
    }
}
