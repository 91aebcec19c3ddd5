//! Seeded hash functions for the Bloom filter
//!
//! Each of the `k` hash functions is MurmurHash3 (x64, 128-bit, low 64 bits
//! kept) over the element bytes followed by the four little-endian bytes of
//! that function's seed. The whole seed is mixed in, so distinct seeds give
//! distinct functions for any `k` up to `u32::MAX`.
//!
//! Seeds are deterministic (`1, 2, ..., k`) so two filters with the same `k`
//! hash identically. This is not a keyed or cryptographic scheme.

use std::io::Read;

/// Generate `count` hash seeds: `seed_i = i + 1`
pub fn generate_hash_seeds(count: u32) -> Vec<u32> {
    (1..=count).collect()
}

/// Hash an element together with a seed
pub fn seeded_hash(element: &[u8], seed: u32) -> u64 {
    let seed_bytes = seed.to_le_bytes();
    let mut source = Read::chain(element, &seed_bytes[..]);

    // Reading from in-memory slices cannot fail
    murmur3::murmur3_x64_128(&mut source, 0).unwrap_or(0) as u64
}

/// Bit index in `[0, m)` selected by one hash function
#[inline]
pub fn compute_index(element: &[u8], seed: u32, m: usize) -> usize {
    (seeded_hash(element, seed) % m as u64) as usize
}
