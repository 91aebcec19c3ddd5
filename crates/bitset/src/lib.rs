//! # BitSet
//!
//! Fixed-capacity bit vector packed into 64-bit words.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): `BitSet` storage and bit arithmetic
//! - **Errors** (`error`): `BitSetError` for the bounds-checked operations
//!
//! ## Invariants
//!
//! - **Storage**: `num_words() == num_bits() / 64 + 1`
//! - **Equality**: storage-based, declared capacity is not compared
//! - **Single writer**: all mutation goes through `&mut self`
//!
//! ## Usage Example
//!
//! ```
//! use bitset::BitSet;
//!
//! let mut bits = BitSet::new(10);
//! bits.set_bit_on(5);
//!
//! assert!(bits.is_bit_on(5));
//! assert_eq!(bits.count_bits_on(), 1);
//! assert_eq!(bits.count_bits_off(), 9);
//!
//! // Checked access rejects indices past the declared capacity
//! assert!(bits.try_set_bit_on(10).is_err());
//! ```

pub mod domain;
pub mod error;

pub use domain::{BitSet, WORD_BITS};
pub use error::BitSetError;
