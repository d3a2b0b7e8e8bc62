//! Error types for wave field construction and queries.

use thiserror::Error;

/// Errors produced by the wave evaluator.
#[derive(Debug, Error)]
pub enum WaveError {
    /// A construction input was non-finite or not strictly positive.
    #[error("invalid wave parameter `{name}`: {value} (must be finite and > 0)")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A query argument was outside its valid domain.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },
}
