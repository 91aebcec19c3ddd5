//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Core Bloom filter over atomic flags
//! - Seeded hash functions
//! - Parameter calculations
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - No locks; shared state is per-flag atomics

pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod parameters;

pub use bloom_filter::BloomFilter;
pub use config::{BloomConfig, BloomConfigBuilder, MAX_HASH_COUNT, MAX_SIZE_BITS};
pub use parameters::{calculate_fpr, calculate_optimal_parameters, BloomFilterParams};
