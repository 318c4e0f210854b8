//! Shared in-memory replay of cache files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::CacheError;

/// Path-keyed store of loaded cache files.
///
/// The first open of a path reads the whole file into memory; later opens
/// of the same path share the same array. The store is a plain value owned
/// by the search driver; dropping it and every reader frees the data.
#[derive(Default)]
pub struct SequenceStore {
    loaded: HashMap<PathBuf, Arc<[u64]>>,
}

impl SequenceStore {
    pub fn new() -> SequenceStore {
        SequenceStore::default()
    }

    /// Opens a reader over the cache file at `path`. Readers opened from
    /// the same path share one underlying array and advance independently.
    pub fn open(&mut self, path: &Path) -> Result<SequenceReader, CacheError> {
        if let Some(values) = self.loaded.get(path) {
            return Ok(SequenceReader::new(Arc::clone(values)));
        }

        let values = load_file(path)?;
        tracing::debug!(
            path = %path.display(),
            values = values.len(),
            "loaded sequence cache file"
        );
        self.loaded.insert(path.to_path_buf(), Arc::clone(&values));
        Ok(SequenceReader::new(values))
    }
}

fn load_file(path: &Path) -> Result<Arc<[u64]>, CacheError> {
    let bytes = std::fs::read(path)?;
    if bytes.len() % 8 != 0 {
        return Err(CacheError::Truncated {
            path: path.display().to_string(),
            size: bytes.len() as u64,
        });
    }

    let values: Vec<u64> = bytes
        .chunks_exact(8)
        .map(|chunk| u64::from_le_bytes(chunk.try_into().unwrap()))
        .collect();
    Ok(values.into())
}

/// Cursor over one loaded cache file.
pub struct SequenceReader {
    values: Arc<[u64]>,
    cursor: usize,
}

impl SequenceReader {
    fn new(values: Arc<[u64]>) -> SequenceReader {
        SequenceReader { values, cursor: 0 }
    }

    /// Returns the next sequence, or `None` at the 0 sentinel or the
    /// physical end of the file.
    pub fn next_sequence(&mut self) -> Option<u64> {
        let value = *self.values.get(self.cursor)?;
        self.cursor += 1;
        if value == 0 {
            None
        } else {
            Some(value)
        }
    }

    /// Rewinds this cursor without affecting sibling readers.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Discards the next `count` sequences. Used to resume a search run.
    pub fn skip(&mut self, count: usize) {
        for _ in 0..count {
            if self.next_sequence().is_none() {
                break;
            }
        }
    }
}
