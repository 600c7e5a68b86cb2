//! Error types raised while configuring the recommender.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when a scorer configuration is unusable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScorerConfigError {
    /// The recommendation limit was zero.
    #[error("recommendation limit must be at least 1")]
    ZeroLimit,
    /// A weight preset name was not recognised.
    #[error("unknown weight preset '{0}' (expected garment or material)")]
    UnknownPreset(String),
}
