//! Integration test for the generate-write-replay cycle.
//!
//! Verifies that:
//! 1. A generator run written through `CacheWriter` replays identically
//! 2. Every replayed sequence satisfies the enumeration contract
//! 3. The manifest count matches the stream

use bracelet_cache::{CacheManifest, CacheWriter, SequenceStore};
use bracelet_core::DeBruijnGenerator;
use chrono::Utc;

#[test]
fn generated_stream_replays_byte_identically() {
    let dir = tempfile::tempdir().unwrap();
    let cache_path = dir.path().join("dbn_8_4.bin");

    // Length 8 enumerates quickly and completely.
    let generated: Vec<u64> = DeBruijnGenerator::new(8, 4, false).unwrap().collect();
    assert!(!generated.is_empty());

    let mut writer = CacheWriter::create(&cache_path).unwrap();
    for sequence in &generated {
        writer.append(*sequence).unwrap();
    }
    let summary = writer.finish().unwrap();
    assert_eq!(summary.sequence_count as usize, generated.len());

    let manifest = CacheManifest {
        file: "dbn_8_4.bin".to_string(),
        sequence_bits: 8,
        one_bits: 4,
        strict: false,
        sequence_count: summary.sequence_count,
        sha256: summary.sha256,
        created_at: Utc::now(),
    };
    let manifest_path = CacheManifest::path_for(&cache_path);
    manifest.write(&manifest_path).unwrap();

    let mut store = SequenceStore::new();
    let mut reader = store.open(&cache_path).unwrap();
    let mut replayed = Vec::new();
    while let Some(sequence) = reader.next_sequence() {
        replayed.push(sequence);
    }
    assert_eq!(replayed, generated);

    let loaded = CacheManifest::load(&manifest_path).unwrap();
    assert_eq!(loaded.sequence_count as usize, replayed.len());

    // A second pass after reset sees the same stream.
    reader.reset();
    let mut second: Vec<u64> = Vec::new();
    while let Some(sequence) = reader.next_sequence() {
        second.push(sequence);
    }
    assert_eq!(second, replayed);
}
