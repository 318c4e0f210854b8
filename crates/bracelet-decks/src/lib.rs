//! # Bracelet Decks
//!
//! Turns candidate axis bundles into concrete deck orderings.
//!
//! The compound search fixes every position's suit and narrows its value to
//! either a single card or one of four ambiguous pairs. This crate parses
//! the candidate text blocks, enumerates the 2^16 ways of resolving the
//! ambiguous pairs, tests the predicate catalog on every resulting deck,
//! and keeps the best-scoring arrangement per block.
//!
//! Two value schemes ship: `umake` reads the axes as 7K/8K/4T, `uplus2`
//! reinterprets the same file as 92/T2/6Q with different pairs. Both decode
//! through the same realizer.

mod driver;
mod parse;
mod realize;
mod render;
mod scheme;
mod score;

pub use driver::{process_candidates, DeckRunOptions, DeckRunStats};
pub use parse::{BlockAccumulator, CandidateBlock, FeedResult};
pub use realize::{realize_best, validate_block, RealizedDeck};
pub use render::{render_deck, render_supported};
pub use scheme::{AmbiguousPair, CellCode, ValueScheme, UMAKE, UPLUS2};
pub use score::{packed_score, spread_penalty, spread_score};

use bracelet_core::bits::BitStringError;
use bracelet_core::Suit;

/// Candidate processing failure.
///
/// I/O failures and bracelet-invalid input sequences are fatal (the file is
/// corrupt); every other kind skips the current record with a diagnostic.
#[derive(Debug, thiserror::Error)]
pub enum CandidateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown sequence label {0:?}")]
    UnknownLabel(String),

    #[error("missing {label} sequence")]
    MissingAxis { label: &'static str },

    #[error("bad {label} sequence: {source}")]
    BadSequence {
        label: &'static str,
        source: BitStringError,
    },

    #[error("{label} sequence is not bracelet-valid; the candidate file is corrupt")]
    InvalidSequence { label: &'static str },

    #[error("value code {code} at position {position} decodes to no card")]
    IllegalValueCode { position: usize, code: u8 },

    #[error("ambiguous pair {pair} of suit {suit:?} occurs {count} times instead of twice")]
    AmbiguityLayout { pair: usize, suit: Suit, count: u8 },

    #[error("realized cells do not form a complete deck")]
    IncompleteDeck,
}

impl CandidateError {
    /// Whether this error invalidates the whole file rather than one
    /// record.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CandidateError::Io(_) | CandidateError::InvalidSequence { .. }
        )
    }
}
