//! Bloom filter configuration and validation
//!
//! # Example
//!
//! ```
//! use bloom_filter::domain::BloomConfigBuilder;
//!
//! let config = BloomConfigBuilder::new()
//!     .expected_elements(1000)
//!     .target_fpr(0.01)
//!     .build()
//!     .expect("Valid config");
//!
//! assert_eq!(config.hash_count, 7);
//! ```

use serde::{Deserialize, Serialize};

use super::parameters::calculate_optimal_parameters;
use crate::error::FilterError;

/// Upper bound on the number of bit flags in one filter
pub const MAX_SIZE_BITS: usize = u32::MAX as usize;

/// Upper bound on the number of hash functions
pub const MAX_HASH_COUNT: usize = 1 << 16;

/// Bloom filter configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloomConfig {
    /// Number of bit flags (m)
    pub size_bits: usize,
    /// Number of hash functions (k)
    pub hash_count: usize,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            size_bits: 10_000,
            hash_count: 4,
        }
    }
}

impl BloomConfig {
    /// Create a new configuration with validation
    pub fn new(size_bits: usize, hash_count: usize) -> Result<Self, FilterError> {
        let config = Self {
            size_bits,
            hash_count,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject zero or oversized parameters
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.size_bits == 0 {
            return Err(FilterError::InvalidArgument(
                "size_bits cannot be 0".to_string(),
            ));
        }

        if self.size_bits > MAX_SIZE_BITS {
            return Err(FilterError::InvalidArgument(format!(
                "size_bits {} exceeds maximum {}",
                self.size_bits, MAX_SIZE_BITS
            )));
        }

        if self.hash_count == 0 {
            return Err(FilterError::InvalidArgument(
                "hash_count cannot be 0".to_string(),
            ));
        }

        if self.hash_count > MAX_HASH_COUNT {
            return Err(FilterError::InvalidArgument(format!(
                "hash_count {} exceeds maximum {}",
                self.hash_count, MAX_HASH_COUNT
            )));
        }

        Ok(())
    }

    /// Builder-style method to set the size in bits
    pub fn with_size_bits(mut self, size_bits: usize) -> Self {
        self.size_bits = size_bits;
        self
    }

    /// Builder-style method to set the hash function count
    pub fn with_hash_count(mut self, hash_count: usize) -> Self {
        self.hash_count = hash_count;
        self
    }
}

/// Builder for BloomConfig with validation
///
/// Either set `size_bits`/`hash_count` directly, or give `expected_elements`
/// and `target_fpr` to derive them. Explicit values win over derived ones.
/// `expected_elements` and `target_fpr` must be given together.
#[derive(Default)]
pub struct BloomConfigBuilder {
    size_bits: Option<usize>,
    hash_count: Option<usize>,
    expected_elements: Option<usize>,
    target_fpr: Option<f64>,
}

impl BloomConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of bit flags
    pub fn size_bits(mut self, bits: usize) -> Self {
        self.size_bits = Some(bits);
        self
    }

    /// Set the number of hash functions
    pub fn hash_count(mut self, count: usize) -> Self {
        self.hash_count = Some(count);
        self
    }

    /// Set the number of elements the filter is sized for
    pub fn expected_elements(mut self, elements: usize) -> Self {
        self.expected_elements = Some(elements);
        self
    }

    /// Set the target false positive rate, in (0, 1)
    pub fn target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = Some(fpr);
        self
    }

    /// Build the BloomConfig, validating all parameters
    pub fn build(self) -> Result<BloomConfig, FilterError> {
        let defaults = BloomConfig::default();

        let derived = match self.target_fpr {
            Some(fpr) => {
                if !(fpr > 0.0 && fpr < 1.0) {
                    return Err(FilterError::InvalidFpr { fpr });
                }
                let elements = self.expected_elements.ok_or_else(|| {
                    FilterError::InvalidArgument(
                        "target_fpr requires expected_elements".to_string(),
                    )
                })?;
                Some(calculate_optimal_parameters(elements, fpr))
            }
            None if self.expected_elements.is_some() => {
                return Err(FilterError::InvalidArgument(
                    "expected_elements requires target_fpr".to_string(),
                ));
            }
            None => None,
        };

        let config = BloomConfig {
            size_bits: self
                .size_bits
                .or(derived.as_ref().map(|p| p.size_bits))
                .unwrap_or(defaults.size_bits),
            hash_count: self
                .hash_count
                .or(derived.as_ref().map(|p| p.hash_count))
                .unwrap_or(defaults.hash_count),
        };

        config.validate()?;
        Ok(config)
    }
}
