//! Pre-allocated workspace buffers for path sampling.
//!
//! This module provides [`PathWorkspace`], which owns the uniform variate
//! buffer consumed by bulk sampling so that repeated calls on one sampler
//! do not reallocate it.
//!
//! # Memory Layout
//!
//! The buffer uses row-major contiguous layout: `uniforms[sim * n_steps + step]`
//! holds the variate that decides step `step` of simulation `sim`.
//!
//! Sampled paths are never stored here. Each call writes into a freshly
//! allocated [`PathMatrix`](super::PathMatrix) owned by the caller.

/// Pre-allocated workspace for bulk sampling.
///
/// # Examples
///
/// ```rust
/// use trinomial_engine::mc::PathWorkspace;
///
/// let mut workspace = PathWorkspace::new(100, 10);
/// workspace.ensure_capacity(1000, 100);
/// assert_eq!(workspace.uniforms().len(), 100_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathWorkspace {
    /// Uniform variates (n_simulations × n_steps), at least `size` long.
    uniforms: Vec<f64>,
    /// Logical size for simulations dimension.
    size_simulations: usize,
    /// Logical size for steps dimension.
    size_steps: usize,
}

impl PathWorkspace {
    /// Creates a new workspace with the specified initial capacity.
    pub fn new(n_simulations: usize, n_steps: usize) -> Self {
        Self {
            uniforms: vec![0.0; n_simulations * n_steps],
            size_simulations: n_simulations,
            size_steps: n_steps,
        }
    }

    /// Ensures the buffer holds at least `n_simulations * n_steps` variates.
    ///
    /// Capacity is tracked on the flat product, so tall and wide requests
    /// share one buffer. Growth is amortised (at least doubling); the buffer
    /// never shrinks.
    ///
    /// Callers must keep the product within
    /// [`MAX_OUTCOMES`](super::MAX_OUTCOMES).
    pub fn ensure_capacity(&mut self, n_simulations: usize, n_steps: usize) {
        let required = n_simulations * n_steps;

        if required > self.uniforms.len() {
            self.uniforms.reserve(required - self.uniforms.len());
            self.uniforms.resize(required, 0.0);
        }

        self.size_simulations = n_simulations;
        self.size_steps = n_steps;
    }

    /// Clears the logical size but retains capacity for reuse.
    #[inline]
    pub fn reset(&mut self) {
        self.size_simulations = 0;
        self.size_steps = 0;
    }

    /// Returns total memory held by the workspace in bytes.
    #[inline]
    pub fn memory_usage(&self) -> usize {
        self.uniforms.capacity() * std::mem::size_of::<f64>()
    }

    /// Number of variates the workspace can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.uniforms.capacity()
    }

    /// Returns the logical `(n_simulations, n_steps)`.
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.size_simulations, self.size_steps)
    }

    /// Uniform variates for the logical size.
    #[inline]
    pub fn uniforms(&self) -> &[f64] {
        &self.uniforms[..self.size_simulations * self.size_steps]
    }

    /// Mutable uniform variates for the logical size.
    #[inline]
    pub fn uniforms_mut(&mut self) -> &mut [f64] {
        let len = self.size_simulations * self.size_steps;
        &mut self.uniforms[..len]
    }
}
