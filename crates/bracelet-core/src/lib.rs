//! # Bracelet Core
//!
//! Bit-level primitives for bracelet (cyclic de Bruijn-like) deck sequences.
//!
//! A deck ordering is described by 52-bit binary sequences, one bit per
//! position around the cyclic deck. A sequence is *bracelet-valid* when all
//! 52 cyclic length-6 windows are distinct 6-bit codes. This crate provides:
//!
//! - the window validator and related bit helpers ([`bits`])
//! - the depth-first generator that enumerates every bracelet-valid sequence
//!   of a given length and bit population ([`generator`])
//! - the card, suit, and deck model ([`cards`])
//! - the catalog of value-subset predicates tested on realized decks
//!   ([`predicates`])
//!
//! Everything here is allocation-light and deterministic; the generator's
//! traversal order is part of the on-disk cache contract and must never
//! change.

pub mod bits;
pub mod cards;
pub mod generator;
pub mod predicates;

pub use bits::{
    format_bits, format_bits_rotated, is_bracelet_valid, has_long_uniform_run, parse_bit_string,
    parse_sequence, popcount, rotate_left_52, BitStringError, SEQUENCE_BITS, SEQUENCE_MASK,
    WINDOW_BITS, WINDOW_MASK,
};
pub use cards::{Card, Deck, Suit, DECK_SIZE};
pub use generator::{DeBruijnGenerator, GeneratorError};
pub use predicates::{PredicateBits, ValuePredicate, ValueSet};
