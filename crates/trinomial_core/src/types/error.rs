//! Error types for structured error handling.
//!
//! This module provides `WalkError`, shared by the core model, the sampling
//! engine and any front end that validates user input.

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, WalkError>;

/// Categorised random walk errors.
///
/// # Variants
/// - `InvalidParameter`: Non-positive counts, negative probabilities, or a
///   probability triple that does not sum to one
/// - `NumericDegeneracy`: An operation would divide by a zero standard
///   deviation
///
/// # Examples
/// ```
/// use trinomial_core::types::WalkError;
///
/// let err = WalkError::invalid("n_steps", "must be positive, got 0");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'n_steps': must be positive, got 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    /// Invalid parameter value with name and description.
    ///
    /// Raised before any sampling work begins.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// The theoretical standard deviation is zero.
    ///
    /// Advisory: a deterministic walk is valid, but quantities normalised
    /// by sigma are undefined for it.
    #[error("Numeric degeneracy: {0}")]
    NumericDegeneracy(String),
}

impl WalkError {
    /// Create an `InvalidParameter` error.
    pub fn invalid(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }

    /// Create a `NumericDegeneracy` error.
    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::NumericDegeneracy(msg.into())
    }

    /// Returns `true` for `InvalidParameter`.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}
