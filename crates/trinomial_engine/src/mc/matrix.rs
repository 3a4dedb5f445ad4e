//! Sampled path storage.
//!
//! # Memory Layout
//!
//! Paths are stored in row-major order: `data[sim * (n_steps + 1) + step]`
//! where `step = 0` is the origin.

/// An `n_simulations × (n_steps + 1)` grid of walk positions.
///
/// Row `i` is the trajectory of simulation `i`. Column 0 is the origin (0)
/// and column `j` is the position after `j` steps. Every matrix is freshly
/// allocated and owned by the caller.
///
/// # Examples
///
/// ```rust
/// use trinomial_engine::mc::PathSampler;
/// use trinomial_core::ProbabilityTriple;
///
/// let mut sampler = PathSampler::from_seed(7);
/// let paths = sampler
///     .sample(10, &ProbabilityTriple::uniform(), 3)
///     .unwrap();
///
/// assert_eq!(paths.shape(), (3, 11));
/// assert!(paths.rows().all(|row| row[0] == 0.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathMatrix {
    data: Vec<f64>,
    n_simulations: usize,
    n_steps: usize,
}

impl PathMatrix {
    /// Zero-filled matrix with the given dimensions.
    pub(crate) fn zeros(n_simulations: usize, n_steps: usize) -> Self {
        Self {
            data: vec![0.0; n_simulations * (n_steps + 1)],
            n_simulations,
            n_steps,
        }
    }

    /// Number of rows (independent simulations).
    #[inline]
    pub fn n_simulations(&self) -> usize {
        self.n_simulations
    }

    /// Number of steps per path. Each row has `n_steps + 1` entries.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Number of columns, `n_steps + 1`.
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.n_steps + 1
    }

    /// `(rows, columns)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_simulations, self.n_columns())
    }

    /// Position of simulation `sim` after `step` steps.
    #[inline]
    pub fn get(&self, sim: usize, step: usize) -> Option<f64> {
        if sim < self.n_simulations && step <= self.n_steps {
            Some(self.data[sim * self.n_columns() + step])
        } else {
            None
        }
    }

    /// Trajectory of simulation `sim`.
    ///
    /// # Panics
    ///
    /// Panics if `sim >= n_simulations`.
    #[inline]
    pub fn row(&self, sim: usize) -> &[f64] {
        let cols = self.n_columns();
        &self.data[sim * cols..(sim + 1) * cols]
    }

    /// Iterates over trajectories in simulation order.
    #[inline]
    pub fn rows(&self) -> std::slice::ChunksExact<'_, f64> {
        self.data.chunks_exact(self.n_columns())
    }

    /// Positions of every simulation after `step` steps.
    ///
    /// # Panics
    ///
    /// Panics if `step > n_steps`.
    pub fn column(&self, step: usize) -> Vec<f64> {
        assert!(step <= self.n_steps, "step {} out of range", step);
        self.rows().map(|row| row[step]).collect()
    }

    /// Final positions, one per simulation.
    #[inline]
    pub fn terminal_values(&self) -> Vec<f64> {
        self.column(self.n_steps)
    }

    /// Row-major backing data.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable row-major backing data.
    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consumes the matrix, returning its row-major data.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Copies the matrix into one `Vec` per simulation.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_matrix() -> PathMatrix {
        let mut matrix = PathMatrix::zeros(2, 3);
        matrix
            .as_mut_slice()
            .copy_from_slice(&[0.0, 1.0, 1.0, 2.0, 0.0, -1.0, 0.0, -1.0]);
        matrix
    }

    #[test]
    fn test_shape() {
        let matrix = PathMatrix::zeros(4, 9);
        assert_eq!(matrix.shape(), (4, 10));
        assert_eq!(matrix.as_slice().len(), 40);
    }

    #[test]
    fn test_row_and_column_access() {
        let matrix = sample_matrix();
        assert_eq!(matrix.row(0), &[0.0, 1.0, 1.0, 2.0]);
        assert_eq!(matrix.row(1), &[0.0, -1.0, 0.0, -1.0]);
        assert_eq!(matrix.column(1), vec![1.0, -1.0]);
        assert_eq!(matrix.terminal_values(), vec![2.0, -1.0]);
        assert_eq!(matrix.rows().count(), 2);
    }

    #[test]
    fn test_get_bounds() {
        let matrix = sample_matrix();
        assert_eq!(matrix.get(1, 3), Some(-1.0));
        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.get(0, 4), None);
    }

    #[test]
    fn test_to_rows_and_into_vec() {
        let matrix = sample_matrix();
        assert_eq!(matrix.to_rows()[1], vec![0.0, -1.0, 0.0, -1.0]);
        assert_eq!(matrix.into_vec().len(), 8);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_column_out_of_range() {
        sample_matrix().column(4);
    }
}
