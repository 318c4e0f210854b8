//! # Bracelet Cache
//!
//! Persistence for enumerated primitive sequences.
//!
//! The generator's output is expensive to recompute, so it is written once
//! to a binary cache file and replayed many times by the compound search.
//! A cache file is a raw little-endian `u64` stream terminated by the value
//! 0 (which can never be a valid sequence), named
//! `dbn_<bits>_<ones>[_short].bin`. A JSON manifest sits next to each file
//! recording the enumeration parameters, the sequence count, and a SHA-256
//! checksum of the stream.
//!
//! [`SequenceStore`] loads each file once and hands out independent
//! [`SequenceReader`] cursors over the shared data; resetting a reader is a
//! single integer write and never touches the file again.

mod manifest;
mod naming;
mod store;
mod writer;

pub use manifest::CacheManifest;
pub use naming::{cache_file_name, CachePaths, SUIT_ONE_BITS, VALUE_ONE_BITS};
pub use store::{SequenceReader, SequenceStore};
pub use writer::{CacheWriter, CacheWriterSummary};

/// Cache failure.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("environment variable {0} is not set")]
    MissingEnvVar(&'static str),

    #[error("cache file {path} is truncated ({size} bytes is not a multiple of 8)")]
    Truncated { path: String, size: u64 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
