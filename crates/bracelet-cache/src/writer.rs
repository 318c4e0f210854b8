//! Streamed creation of cache files.

use std::io::{BufWriter, Write};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::CacheError;

/// Writes a sequence stream to a cache file, hashing as it goes.
///
/// [`CacheWriter::finish`] appends the 0 sentinel, flushes, and returns the
/// sequence count and the SHA-256 of everything written (sentinel included)
/// for the manifest.
pub struct CacheWriter {
    output: BufWriter<std::fs::File>,
    hasher: Sha256,
    sequence_count: u64,
}

/// Result of a completed cache write.
#[derive(Debug, Clone)]
pub struct CacheWriterSummary {
    pub sequence_count: u64,
    pub sha256: String,
}

impl CacheWriter {
    pub fn create(path: &Path) -> Result<CacheWriter, CacheError> {
        let file = std::fs::File::create(path)?;
        Ok(CacheWriter {
            output: BufWriter::new(file),
            hasher: Sha256::new(),
            sequence_count: 0,
        })
    }

    pub fn append(&mut self, sequence: u64) -> Result<(), CacheError> {
        debug_assert_ne!(sequence, 0, "0 is reserved for the end sentinel");
        let bytes = sequence.to_le_bytes();
        self.output.write_all(&bytes)?;
        self.hasher.update(bytes);
        self.sequence_count += 1;
        Ok(())
    }

    pub fn finish(mut self) -> Result<CacheWriterSummary, CacheError> {
        let sentinel = 0u64.to_le_bytes();
        self.output.write_all(&sentinel)?;
        self.hasher.update(sentinel);
        self.output.flush()?;

        Ok(CacheWriterSummary {
            sequence_count: self.sequence_count,
            sha256: format!("{:x}", self.hasher.finalize()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SequenceStore;

    #[test]
    fn written_files_replay_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dbn_8_4.bin");

        let mut writer = CacheWriter::create(&path).unwrap();
        for value in [10, 20, 30] {
            writer.append(value).unwrap();
        }
        let summary = writer.finish().unwrap();
        assert_eq!(summary.sequence_count, 3);
        assert_eq!(summary.sha256.len(), 64);

        // Three values plus the sentinel.
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 32);

        let mut store = SequenceStore::new();
        let mut reader = store.open(&path).unwrap();
        assert_eq!(reader.next_sequence(), Some(10));
        assert_eq!(reader.next_sequence(), Some(20));
        assert_eq!(reader.next_sequence(), Some(30));
        assert_eq!(reader.next_sequence(), None);
    }
}
