//! The nested search loops over cached primitive sequences.

use std::io::Write;

use serde::{Deserialize, Serialize};

use bracelet_cache::{CachePaths, SequenceStore};
use bracelet_core::bits::{has_long_uniform_run, SEQUENCE_MASK};
use bracelet_core::is_bracelet_valid;

use crate::emit::{write_bundle, ODD_HEADER, SUIT_HEADER};
use crate::filters::{has_deck_histogram, has_high_axis_overlap, has_odd_split, SuitMasks};
use crate::secondary::{solve_c4t, solve_c8k};
use crate::SearchError;

/// Search parameters.
///
/// The skip counts discard that many entries from the corresponding loop
/// before the search begins; each applies only to the first pass of its
/// loop, so a resumed run continues exactly where the previous one left
/// off.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchOptions {
    pub red_skip: usize,
    pub cd_skip: usize,
    pub odd_skip: usize,
    pub c7k_skip: usize,
    /// Use the suit cache without all-zero or all-one windows.
    pub strict_suit_windows: bool,
    /// Use the value cache without all-zero or all-one windows.
    pub strict_value_windows: bool,
    /// Synthesize an 8K axis for every candidate.
    pub with_c8k: bool,
    /// Require the four 8K-cleared bits to sit at least six apart.
    pub sevens_apart: bool,
    /// Synthesize a 4T axis for every candidate.
    pub with_c4t: bool,
}

/// Counters from a finished search run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// HD sequences that passed the uniform-run gate.
    pub red_examined: u64,
    /// Accepted (HD, CD) suit pairs.
    pub suit_pairs: u64,
    /// Accepted odd axes across all suit pairs.
    pub odd_candidates: u64,
    /// Emitted candidate bundles.
    pub candidates: u64,
}

/// The four searched axes plus the derived HC axis of one candidate.
#[derive(Debug, Clone, Copy)]
pub struct PrimaryAxes {
    pub red: u64,
    pub cd: u64,
    pub hc: u64,
    pub odd: u64,
    pub c7k: u64,
}

/// A complete candidate ready for emission.
#[derive(Debug, Clone, Copy)]
pub struct CandidateBundle {
    pub red: u64,
    pub cd: u64,
    pub hc: u64,
    pub odd: u64,
    pub c7k: u64,
    pub c8k: Option<u64>,
    pub c4t: Option<u64>,
}

/// Runs the compound search, writing candidate blocks to `sink`.
///
/// Loop nesting is HD, then CD, then ODD, then 7K. Inner readers reset to
/// the start of their file on every outer advance. The search ends when
/// the HD file is exhausted.
pub fn run_search(
    store: &mut SequenceStore,
    paths: &CachePaths,
    options: &SearchOptions,
    sink: &mut dyn Write,
) -> Result<SearchStats, SearchError> {
    let suit_path = paths.suit_file(options.strict_suit_windows);
    let value_path = paths.value_file(options.strict_value_windows);

    let mut red_reader = store.open(&suit_path)?;
    let mut cd_reader = store.open(&suit_path)?;
    let mut odd_reader = store.open(&value_path)?;
    let mut c7k_reader = store.open(&value_path)?;

    red_reader.skip(options.red_skip);
    let mut cd_skip = options.cd_skip;
    let mut odd_skip = options.odd_skip;
    let mut c7k_skip = options.c7k_skip;

    let mut stats = SearchStats::default();

    'red: loop {
        // HD axes with a uniform window can never survive the later
        // gates, so they are rejected before any inner loop runs.
        let red = loop {
            match red_reader.next_sequence() {
                None => break 'red,
                Some(sequence) if has_long_uniform_run(sequence) => continue,
                Some(sequence) => break sequence,
            }
        };
        stats.red_examined += 1;

        cd_reader.reset();
        cd_reader.skip(std::mem::take(&mut cd_skip));

        while let Some(cd) = cd_reader.next_sequence() {
            let Some(suits) = SuitMasks::split(red, cd) else {
                continue;
            };
            let hc = suits.hc();
            if !is_bracelet_valid(hc) {
                continue;
            }
            debug_assert_eq!(hc, (red ^ cd) & SEQUENCE_MASK);

            stats.suit_pairs += 1;
            tracing::info!(suit_pairs = stats.suit_pairs, "found suit sequences");
            writeln!(sink, "{SUIT_HEADER}")?;

            odd_reader.reset();
            odd_reader.skip(std::mem::take(&mut odd_skip));

            while let Some(odd) = odd_reader.next_sequence() {
                if !has_odd_split(&suits, odd) {
                    continue;
                }

                stats.odd_candidates += 1;
                tracing::info!(odd_candidates = stats.odd_candidates, "found odd sequence candidate");
                writeln!(sink, "{ODD_HEADER}")?;

                c7k_reader.reset();
                c7k_reader.skip(std::mem::take(&mut c7k_skip));

                while let Some(c7k) = c7k_reader.next_sequence() {
                    if !has_high_axis_overlap(red, cd, hc, odd, c7k) {
                        continue;
                    }
                    if !has_deck_histogram(red, cd, odd, c7k) {
                        continue;
                    }

                    let axes = PrimaryAxes {
                        red,
                        cd,
                        hc,
                        odd,
                        c7k,
                    };

                    let mut c8k = None;
                    let mut pinned = 0u64;
                    if options.with_c8k {
                        match solve_c8k(&axes, options.sevens_apart) {
                            Some(solution) => {
                                c8k = Some(solution.c8k);
                                pinned = solution.diff;
                            }
                            None => continue,
                        }
                    }

                    let mut c4t = None;
                    if options.with_c4t {
                        match solve_c4t(&axes, pinned) {
                            Some(sequence) => c4t = Some(sequence),
                            None => continue,
                        }
                    }

                    let bundle = CandidateBundle {
                        red,
                        cd,
                        hc,
                        odd,
                        c7k,
                        c8k,
                        c4t,
                    };
                    write_bundle(sink, &bundle)?;
                    sink.flush()?;

                    stats.candidates += 1;
                    tracing::info!(candidates = stats.candidates, "emitted candidate bundle");
                }
            }
        }
    }

    tracing::info!(
        red_examined = stats.red_examined,
        candidates = stats.candidates,
        "processed all HD sequences"
    );
    Ok(stats)
}
