//! # Bloom Filter
//!
//! Approximate set membership over per-bit atomic flags.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `BloomFilter`: flags, `add`, `contains`
//!   - `hash_functions`: seeded MurmurHash3 and seed generation
//!   - `parameters`: optimal `m`/`k` and FPR formulas
//!   - `BloomConfig` / `BloomConfigBuilder`: validated configuration
//! - **Errors** (`error`): `FilterError`
//!
//! ## Invariants
//!
//! - **No false negatives**: if `add(e)` returned, `contains(e)` is true
//! - **Monotonic**: flags never reset; there is no removal
//! - **Deterministic seeds**: `seed_i = i + 1`, identical across filters
//!
//! ## Concurrency
//!
//! `add` and `contains` take `&self`. Share a filter with `Arc` and insert
//! from any number of threads; no external locking is needed.
//!
//! ## Usage Example
//!
//! ```
//! use bloom_filter::BloomFilter;
//! use std::sync::Arc;
//!
//! let filter = Arc::new(BloomFilter::new(10_000, 4)?);
//!
//! let writer = {
//!     let filter = Arc::clone(&filter);
//!     std::thread::spawn(move || filter.add(b"alpha"))
//! };
//! writer.join().unwrap();
//!
//! assert!(filter.contains(b"alpha"));
//! # Ok::<(), bloom_filter::FilterError>(())
//! ```

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{
    calculate_fpr, calculate_optimal_parameters, BloomConfig, BloomConfigBuilder, BloomFilter,
    BloomFilterParams,
};
pub use error::FilterError;
