//! Domain Layer - packed bit storage
//!
//! RULES:
//! - No I/O operations
//! - No interior mutability; writers hold `&mut`

pub mod bit_set;

pub use bit_set::{BitSet, WORD_BITS};
