//! Error types for the trinomial CLI.

use thiserror::Error;
use trinomial_core::WalkError;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Walk model or sampling error
    #[error("Simulation error: {0}")]
    Walk(#[from] WalkError),

    /// Output serialisation error
    #[error("Serialisation error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
