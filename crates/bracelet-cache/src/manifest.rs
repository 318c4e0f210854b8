//! JSON manifests describing cache files.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CacheError;

/// Sidecar manifest for one cache file, written by the cache builder.
///
/// The checksum covers the whole binary stream including the end sentinel,
/// so a truncated or hand-edited file can be detected before a long search
/// run consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheManifest {
    /// File name of the described `.bin`, without directory.
    pub file: String,
    /// Sequence length in bits.
    pub sequence_bits: u32,
    /// Required bit population; 0 means unconstrained.
    pub one_bits: u32,
    /// Whether all-zero and all-one windows were excluded.
    pub strict: bool,
    /// Number of sequences before the sentinel.
    pub sequence_count: u64,
    /// SHA-256 of the binary stream, lowercase hex.
    pub sha256: String,
    /// When the enumeration finished.
    pub created_at: DateTime<Utc>,
}

impl CacheManifest {
    /// Manifest path for a cache file: `dbn_52_26.bin` gets
    /// `dbn_52_26.manifest.json` next to it.
    pub fn path_for(cache_file: &Path) -> PathBuf {
        cache_file.with_extension("manifest.json")
    }

    pub fn write(&self, path: &Path) -> Result<(), CacheError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<CacheManifest, CacheError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
