//! Integration tests for the search driver's loop mechanics.
//!
//! Real cache files take hours to enumerate, so these tests run the driver
//! over small synthetic caches whose entries can never pass the suit
//! filters. What is verified is the machinery around the filters:
//! termination on exhaustion, the uniform-run gate, skip counts, and that
//! nothing is emitted for hopeless inputs.

use std::io::Write;

use bracelet_cache::{CachePaths, CacheWriter, SequenceStore};
use bracelet_core::bits::{has_long_uniform_run, SEQUENCE_MASK};
use bracelet_search::{run_search, SearchOptions};

/// Distinct 52-bit values with no uniform 6-bit window: alternating
/// patterns with a few bits toggled pairwise.
fn non_uniform_values(count: usize) -> Vec<u64> {
    let base = 0x5555555555555 & SEQUENCE_MASK;
    (0..count)
        .map(|i| {
            // Flipping two adjacent bits keeps every window mixed.
            let flipped = base ^ (0b11 << (2 * i + 8));
            assert!(!has_long_uniform_run(flipped), "bad fixture {i}");
            flipped
        })
        .collect()
}

fn write_cache(path: &std::path::Path, values: &[u64]) {
    let mut writer = CacheWriter::create(path).unwrap();
    for value in values {
        writer.append(*value).unwrap();
    }
    writer.finish().unwrap();
}

fn fixture_paths(dir: &tempfile::TempDir, suit_values: &[u64], value_values: &[u64]) -> CachePaths {
    let paths = CachePaths::at(dir.path());
    write_cache(&paths.suit_file(false), suit_values);
    write_cache(&paths.value_file(false), value_values);
    paths
}

#[test]
fn exhausting_the_suit_file_terminates_the_search() {
    let dir = tempfile::tempdir().unwrap();
    let values = non_uniform_values(5);
    let paths = fixture_paths(&dir, &values, &values);

    let mut store = SequenceStore::new();
    let mut sink = Vec::new();
    let stats = run_search(&mut store, &paths, &SearchOptions::default(), &mut sink).unwrap();

    // Every HD entry survives the uniform-run gate, no pair survives the
    // suit split, nothing is emitted.
    assert_eq!(stats.red_examined, 5);
    assert_eq!(stats.suit_pairs, 0);
    assert_eq!(stats.candidates, 0);
    assert!(sink.is_empty());
}

#[test]
fn uniform_runs_are_rejected_before_the_inner_loops() {
    let dir = tempfile::tempdir().unwrap();
    let mut suit_values = non_uniform_values(3);
    // A long run of ones trips the uniform gate.
    suit_values.insert(1, 0x3F);
    let paths = fixture_paths(&dir, &suit_values, &non_uniform_values(2));

    let mut store = SequenceStore::new();
    let mut sink = Vec::new();
    let stats = run_search(&mut store, &paths, &SearchOptions::default(), &mut sink).unwrap();

    assert_eq!(stats.red_examined, 3);
}

#[test]
fn red_skip_discards_leading_entries() {
    let dir = tempfile::tempdir().unwrap();
    let values = non_uniform_values(5);
    let paths = fixture_paths(&dir, &values, &values);

    let options = SearchOptions {
        red_skip: 3,
        ..SearchOptions::default()
    };
    let mut store = SequenceStore::new();
    let mut sink = Vec::new();
    let stats = run_search(&mut store, &paths, &options, &mut sink).unwrap();

    assert_eq!(stats.red_examined, 2);
}

#[test]
fn missing_cache_files_fail_before_searching() {
    let dir = tempfile::tempdir().unwrap();
    let paths = CachePaths::at(dir.path());

    let mut store = SequenceStore::new();
    let mut sink: Vec<u8> = Vec::new();
    let result = run_search(&mut store, &paths, &SearchOptions::default(), &mut sink);
    assert!(result.is_err());
    sink.flush().unwrap();
    assert!(sink.is_empty());
}
