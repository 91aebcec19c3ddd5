//! Error types for the bit set

use thiserror::Error;

/// Errors returned by the bounds-checked bit set operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitSetError {
    #[error("Bit index out of range: {index} >= {capacity}")]
    IndexOutOfRange { index: u64, capacity: usize },
}
