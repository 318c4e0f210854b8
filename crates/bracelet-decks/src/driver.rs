//! Candidate file processing: parse, realize, report.

use std::io::{BufRead, Write};

use bracelet_core::bits::format_bits_rotated;

use crate::parse::{BlockAccumulator, CandidateBlock, FeedResult};
use crate::realize::{realize_best, validate_block};
use crate::render::{render_deck, render_supported};
use crate::scheme::ValueScheme;
use crate::CandidateError;

/// Options for one processing run.
#[derive(Debug, Clone, Default)]
pub struct DeckRunOptions {
    /// Candidate groups to skip before realizing anything.
    pub skip_groups: u64,
    /// Also test the unusual value subsets.
    pub find_all: bool,
    /// Rotate the display so the nine of diamonds sits on the bottom.
    pub cut_nine_of_diamonds: bool,
    /// Only display decks supporting at least eight predicates.
    pub require_eight: bool,
    /// Echo the input sequences rotated to match the displayed deck.
    pub show_input_sequences: bool,
}

/// Counters from a finished processing run.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeckRunStats {
    pub groups: u64,
    pub realized: u64,
    pub displayed: u64,
    pub skipped_records: u64,
}

/// Processes a candidate file, writing reports to `out`.
///
/// Malformed groups and illegal bundles are skipped with a diagnostic;
/// bracelet-invalid input sequences abort the run because the file itself
/// is corrupt.
pub fn process_candidates(
    input: impl BufRead,
    scheme: &ValueScheme,
    options: &DeckRunOptions,
    out: &mut impl Write,
) -> Result<DeckRunStats, CandidateError> {
    let mut accumulator = BlockAccumulator::new();
    let mut stats = DeckRunStats::default();

    for line in input.lines() {
        let line = line?;
        let outcome = accumulator.feed(&line);

        if !matches!(outcome, FeedResult::Pending) {
            stats.groups += 1;
            if stats.groups % 256 == 0 {
                tracing::debug!(groups = stats.groups, "candidate groups processed");
            }
        }

        match outcome {
            FeedResult::Pending | FeedResult::EmptyGroup => {}
            FeedResult::Malformed(error) => {
                stats.skipped_records += 1;
                tracing::warn!(group = stats.groups, %error, "skipping malformed candidate group");
            }
            FeedResult::Block(block) => {
                if stats.groups <= options.skip_groups {
                    continue;
                }
                validate_block(&block)?;

                match realize_best(&block, scheme, options.find_all) {
                    Err(error) if error.is_fatal() => return Err(error),
                    Err(error) => {
                        stats.skipped_records += 1;
                        tracing::warn!(group = stats.groups, %error, "skipping candidate group");
                    }
                    Ok(realized) => {
                        stats.realized += 1;
                        let major = realized.major_sequence_count();
                        if options.require_eight && major < 8 {
                            continue;
                        }
                        stats.displayed += 1;

                        writeln!(out, "Major sequence count = {major}")?;
                        writeln!(out, "Deck spread score = {}\n", realized.spread_display())?;

                        let top_index = if options.cut_nine_of_diamonds {
                            realized.deck.top_card_index()
                        } else {
                            0
                        };

                        if options.show_input_sequences {
                            write_input_sequences(out, scheme, &block, top_index)?;
                        }

                        out.write_all(render_supported(realized.predicate_bits).as_bytes())?;
                        out.write_all(render_deck(&realized.deck, top_index).as_bytes())?;
                    }
                }
            }
        }
    }

    tracing::info!(
        groups = stats.groups,
        realized = stats.realized,
        displayed = stats.displayed,
        skipped = stats.skipped_records,
        "candidate processing finished"
    );
    Ok(stats)
}

fn write_input_sequences(
    out: &mut impl Write,
    scheme: &ValueScheme,
    block: &CandidateBlock,
    top_index: usize,
) -> std::io::Result<()> {
    let labelled = [
        (scheme.z_label, block.c4t),
        (scheme.x_label, block.c7k),
        (scheme.y_label, block.c8k),
        ("ODD", block.odd),
        ("RED", block.red),
        (" CD", block.cd),
        (" HC", block.hc),
    ];
    for (label, sequence) in labelled {
        writeln!(
            out,
            "{label} sequence:  {}",
            format_bits_rotated(sequence, top_index)
        )?;
    }
    writeln!(out)
}
