//! Error types for U-Packing.

use thiserror::Error;

/// Result type alias for U-Packing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing or packing items.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid item provided.
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Invalid container provided.
    #[error("Invalid container: {0}")]
    InvalidContainer(String),

    /// Decimal arithmetic left the representable range.
    #[error("Numeric range exceeded: {0}")]
    NumericRange(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// No algorithm is registered under the requested identifier.
    #[error("Unknown packing algorithm: {0}")]
    UnknownAlgorithm(u32),

    /// An algorithm returned a different number of units than it was given.
    #[error("Algorithm '{algorithm}' broke its contract: {reason}")]
    AlgorithmContract {
        /// Display name of the offending algorithm.
        algorithm: String,
        /// What went wrong.
        reason: String,
    },

    /// An algorithm reported a failure of its own.
    #[error("Algorithm '{algorithm}' failed: {reason}")]
    AlgorithmFailed {
        /// Display name of the failing algorithm.
        algorithm: String,
        /// Failure message reported by the algorithm.
        reason: String,
    },

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
