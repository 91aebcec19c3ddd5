//! # Benchmark modules
//!
//! - `bitset` - single-bit ops, population count, bulk fill, copy
//! - `bloom_filter` - add/contains across k, parallel add, observed FPR

pub mod bitset;
pub mod bloom_filter;
