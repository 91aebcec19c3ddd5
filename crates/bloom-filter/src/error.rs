//! Error types for the Bloom filter

use thiserror::Error;

/// Errors that can occur when building a Bloom filter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid false positive rate: {fpr} (must be between 0 and 1, exclusive)")]
    InvalidFpr { fpr: f64 },
}
