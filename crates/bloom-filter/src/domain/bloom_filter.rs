//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - `hash_seeds.len() == hash_funcs`, seeds fixed at construction
//! - Flags only ever go from unset to set
//! - No false negatives: once `add(e)` returns, `contains(e)` is true
//!
//! Each flag is its own `AtomicBool`, so `add` and `contains` take `&self`
//! and can run from many threads at once without a lock. Visibility is per
//! flag (sequentially consistent), not per element: a reader racing an
//! unfinished `add` may still see that element as absent.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use super::config::{BloomConfig, BloomConfigBuilder};
use super::hash_functions::{compute_index, generate_hash_seeds};
use super::parameters::calculate_fpr;
use crate::error::FilterError;

/// Concurrent Bloom filter for probabilistic membership testing
///
/// Answers "possibly present" or "definitely absent". There is no removal
/// and no reset.
pub struct BloomFilter {
    /// Size in bits (m)
    m: usize,
    /// One independently settable flag per bit
    bitfield: Box<[AtomicBool]>,
    /// Number of hash functions (k)
    hash_funcs: usize,
    /// One seed per hash function
    hash_seeds: Vec<u32>,
}

impl BloomFilter {
    /// Create a filter with `m` flags and `hash_funcs` hash functions
    ///
    /// Returns [`FilterError::InvalidArgument`] if either is zero.
    pub fn new(m: usize, hash_funcs: usize) -> Result<Self, FilterError> {
        Self::from_config(&BloomConfig {
            size_bits: m,
            hash_count: hash_funcs,
        })
    }

    /// Create a filter from a validated configuration
    pub fn from_config(config: &BloomConfig) -> Result<Self, FilterError> {
        if let Err(e) = config.validate() {
            warn!(
                size_bits = config.size_bits,
                hash_count = config.hash_count,
                error = %e,
                "Rejected bloom filter parameters"
            );
            return Err(e);
        }

        let hash_count = u32::try_from(config.hash_count).map_err(|_| {
            FilterError::InvalidArgument(format!(
                "hash_count {} does not fit in a u32 seed",
                config.hash_count
            ))
        })?;

        let bitfield = (0..config.size_bits)
            .map(|_| AtomicBool::new(false))
            .collect::<Vec<_>>()
            .into_boxed_slice();

        debug!(
            size_bits = config.size_bits,
            hash_count = config.hash_count,
            "Created bloom filter"
        );

        Ok(Self {
            m: config.size_bits,
            bitfield,
            hash_funcs: config.hash_count,
            hash_seeds: generate_hash_seeds(hash_count),
        })
    }

    /// Create a filter sized for `expected_elements` at `target_fpr`
    pub fn with_fpr(expected_elements: usize, target_fpr: f64) -> Result<Self, FilterError> {
        let config = BloomConfigBuilder::new()
            .expected_elements(expected_elements)
            .target_fpr(target_fpr)
            .build()?;
        Self::from_config(&config)
    }

    /// Insert an element
    ///
    /// Re-adding an element changes nothing.
    pub fn add(&self, element: &[u8]) {
        for &seed in &self.hash_seeds {
            let index = compute_index(element, seed, self.m);
            self.bitfield[index].store(true, Ordering::SeqCst);
        }
    }

    /// Test whether an element might be in the filter
    ///
    /// - `true`: possibly present (could be a false positive)
    /// - `false`: definitely absent
    ///
    /// Stops at the first unset flag.
    pub fn contains(&self, element: &[u8]) -> bool {
        self.hash_seeds.iter().all(|&seed| {
            let index = compute_index(element, seed, self.m);
            self.bitfield[index].load(Ordering::SeqCst)
        })
    }

    /// Filter size in bits
    pub fn size_bits(&self) -> usize {
        self.m
    }

    /// Number of hash functions
    pub fn hash_count(&self) -> usize {
        self.hash_funcs
    }

    /// Seeds in hash-function order
    pub fn hash_seeds(&self) -> &[u32] {
        &self.hash_seeds
    }

    /// Number of flags currently set
    pub fn bits_set(&self) -> usize {
        self.bitfield
            .iter()
            .filter(|flag| flag.load(Ordering::Relaxed))
            .count()
    }

    /// Fraction of flags set
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.m as f64
    }

    /// False positive rate implied by the current fill ratio
    pub fn estimated_false_positive_rate(&self) -> f64 {
        self.fill_ratio().powi(self.hash_funcs as i32)
    }

    /// Estimate the number of distinct elements inserted
    ///
    /// n ≈ -(m/k) * ln(1 - X/m) where X is the number of set flags.
    /// Returns infinity once every flag is set.
    pub fn estimated_count(&self) -> f64 {
        let bits_set = self.bits_set() as f64;
        let m = self.m as f64;
        let k = self.hash_funcs as f64;

        if bits_set >= m {
            return f64::INFINITY;
        }

        -(m / k) * (1.0 - bits_set / m).ln()
    }

    /// Theoretical false positive rate after `n` insertions
    pub fn false_positive_rate_for(&self, n: usize) -> f64 {
        calculate_fpr(self.m, n, self.hash_funcs)
    }
}

impl fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("m", &self.m)
            .field("hash_funcs", &self.hash_funcs)
            .field("bits_set", &self.bits_set())
            .finish()
    }
}
