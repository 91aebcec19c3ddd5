//! Packed bit vector
//!
//! INVARIANTS:
//! - `words.len() == num_bits / 64 + 1` (always at least one word)
//! - Bits past `num_bits` in the last word carry no meaning
//!
//! Two indexing paths are provided. The plain operations (`set_bit_on`,
//! `is_bit_on`, ...) never look at the declared capacity and panic only when
//! the index falls outside the allocated words. The `try_*` operations reject
//! any index `>= num_bits` with [`BitSetError::IndexOutOfRange`].

use std::fmt;

use tracing::debug;

use crate::error::BitSetError;

/// Width of one storage word in bits
pub const WORD_BITS: u64 = 64;

/// Fixed-capacity bit vector backed by `u64` words
///
/// Mutation takes `&mut self`, so concurrent writers must be serialized by
/// the caller (e.g. behind a `Mutex`).
#[derive(Clone, Debug)]
pub struct BitSet {
    /// Declared logical capacity
    num_bits: usize,
    /// Packed storage, bit `i` lives in word `i / 64` at position `i % 64`
    words: Vec<u64>,
}

/// Word holding `index`; saturates so an index that overflows `usize`
/// still lands past the storage and panics on access
#[inline]
fn word_index(index: u64) -> usize {
    usize::try_from(index / WORD_BITS).unwrap_or(usize::MAX)
}

#[inline]
fn bit_mask(index: u64) -> u64 {
    1u64 << (index % WORD_BITS)
}

impl BitSet {
    /// Create a bit set with `num_bits` declared bits, all off
    pub fn new(num_bits: usize) -> Self {
        let num_words = num_bits / WORD_BITS as usize + 1;
        debug!(num_bits, num_words, "Allocated bit set");
        Self {
            num_bits,
            words: vec![0u64; num_words],
        }
    }

    /// Declared capacity in bits
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Number of storage words
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Raw storage words in order
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    /// Turn a bit on
    ///
    /// # Panics
    /// Panics if `index / 64` is past the allocated words. Indices between
    /// `num_bits` and the end of the last word are accepted silently.
    pub fn set_bit_on(&mut self, index: u64) {
        self.words[word_index(index)] |= bit_mask(index);
    }

    /// Turn a bit off
    ///
    /// # Panics
    /// Same indexing contract as [`BitSet::set_bit_on`].
    pub fn set_bit_off(&mut self, index: u64) {
        self.words[word_index(index)] &= !bit_mask(index);
    }

    /// Whether a bit is on
    ///
    /// # Panics
    /// Same indexing contract as [`BitSet::set_bit_on`].
    pub fn is_bit_on(&self, index: u64) -> bool {
        self.words[word_index(index)] & bit_mask(index) != 0
    }

    /// Whether a bit is off
    pub fn is_bit_off(&self, index: u64) -> bool {
        !self.is_bit_on(index)
    }

    /// Bounds-checked [`BitSet::set_bit_on`]
    pub fn try_set_bit_on(&mut self, index: u64) -> Result<(), BitSetError> {
        self.check_index(index)?;
        self.set_bit_on(index);
        Ok(())
    }

    /// Bounds-checked [`BitSet::set_bit_off`]
    pub fn try_set_bit_off(&mut self, index: u64) -> Result<(), BitSetError> {
        self.check_index(index)?;
        self.set_bit_off(index);
        Ok(())
    }

    /// Bounds-checked [`BitSet::is_bit_on`]
    pub fn try_is_bit_on(&self, index: u64) -> Result<bool, BitSetError> {
        self.check_index(index)?;
        Ok(self.is_bit_on(index))
    }

    /// Bounds-checked [`BitSet::is_bit_off`]
    pub fn try_is_bit_off(&self, index: u64) -> Result<bool, BitSetError> {
        self.check_index(index)?;
        Ok(self.is_bit_off(index))
    }

    fn check_index(&self, index: u64) -> Result<(), BitSetError> {
        if index >= self.num_bits as u64 {
            return Err(BitSetError::IndexOutOfRange {
                index,
                capacity: self.num_bits,
            });
        }
        Ok(())
    }

    /// Turn every bit off
    pub fn clear_all(&mut self) {
        self.words.fill(0);
    }

    /// Turn every bit on, including the unused tail of the last word
    pub fn set_all(&mut self) {
        self.words.fill(u64::MAX);
    }

    /// Number of bits set across all words
    pub fn count_bits_on(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Declared capacity minus [`BitSet::count_bits_on`]
    ///
    /// Tail bits turned on by [`BitSet::set_all`] are still counted as on, so
    /// this can go negative.
    pub fn count_bits_off(&self) -> i64 {
        self.num_bits as i64 - self.count_bits_on() as i64
    }

    /// Independent deep copy (storage and declared capacity)
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Storage-based equality, same as `==`
    pub fn equals(&self, other: &BitSet) -> bool {
        self == other
    }
}

/// Equality ignores `num_bits`: two sets compare equal when their word
/// arrays have the same length and contents.
impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for BitSet {}

/// Diagnostic dump: every word as 64 binary digits followed by a space
impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            write!(f, "{:064b} ", word)?;
        }
        Ok(())
    }
}
