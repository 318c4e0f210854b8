//! # Bracelet Search
//!
//! The compound search that combines cached primitive sequences into deck
//! candidates.
//!
//! Four nested loops draw HD, CD, ODD, and 7K axes from the cache files and
//! filter them through a chain of population and overlap gates; survivors
//! define a legal 52-card deck up to value ambiguities. The optional 8K and
//! 4T secondary axes are synthesized from an accepted bundle rather than
//! drawn from a file. Accepted bundles are written as text blocks consumed
//! by the deck realizer in a second pass.
//!
//! Everything is deterministic: the candidate order is fixed by the cache
//! files and the loop nesting, which is what makes the resume skip counts
//! meaningful.

mod driver;
mod emit;
mod filters;
mod manifest;
mod secondary;

pub use driver::{run_search, CandidateBundle, PrimaryAxes, SearchOptions, SearchStats};
pub use emit::{write_bundle, write_sequence_line, ODD_HEADER, SUIT_HEADER};
pub use filters::{
    has_deck_histogram, has_high_axis_overlap, has_odd_split, joint_histogram, SuitMasks,
    CARDS_PER_SUIT, DECK_HISTOGRAM,
};
pub use manifest::RunManifest;
pub use secondary::{sevens_apart, solve_c4t, solve_c8k, C8kSolution};

/// Compound search failure.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("cache error: {0}")]
    Cache(#[from] bracelet_cache::CacheError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
