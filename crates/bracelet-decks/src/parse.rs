//! Line-oriented parsing of candidate files.
//!
//! A candidate block is a run of `<LABEL>:<whitespace><52 digits>` lines.
//! Lines containing `Found` are search progress and are discarded. Any
//! line without a colon closes the current block.

use bracelet_core::bits::parse_sequence;

use crate::CandidateError;

/// Axis labels in file order. Under the uplus2 scheme the last three carry
/// the 92, T2, and 6Q axes; the physical labels do not change.
const LABELS: [&str; 7] = ["RED", "CD", "HC", "ODD", "7K", "8K", "4T"];

/// One parsed candidate block. Field names follow the file labels; the
/// uplus2 scheme reinterprets `c7k`/`c8k`/`c4t` as its own axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateBlock {
    pub red: u64,
    pub cd: u64,
    pub hc: u64,
    pub odd: u64,
    pub c7k: u64,
    pub c8k: u64,
    pub c4t: u64,
}

/// Outcome of feeding one line to the accumulator.
#[derive(Debug)]
pub enum FeedResult {
    /// Line consumed; the block is still accumulating.
    Pending,
    /// A block-closing line arrived with nothing accumulated.
    EmptyGroup,
    /// A complete block is ready.
    Block(CandidateBlock),
    /// The group that just closed was malformed and is skipped.
    Malformed(CandidateError),
}

/// Accumulates labelled lines into candidate blocks.
#[derive(Default)]
pub struct BlockAccumulator {
    buffers: [Option<String>; 7],
    poisoned: Option<CandidateError>,
}

impl BlockAccumulator {
    pub fn new() -> BlockAccumulator {
        BlockAccumulator::default()
    }

    /// Feeds one input line. Returns a non-pending result exactly when a
    /// block-closing line (one without a colon) arrives.
    pub fn feed(&mut self, line: &str) -> FeedResult {
        if line.contains("Found") {
            return FeedResult::Pending;
        }

        let Some(colon) = line.find(':') else {
            return self.finish();
        };

        // The label is the leading alphanumeric run; the word `sequence`
        // that follows it is decoration.
        let label_region = line[..colon].trim_start();
        let label_end = label_region
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(label_region.len());
        let label = &label_region[..label_end];
        let payload = &line[colon + 1..];

        match LABELS.iter().position(|known| *known == label) {
            Some(index) => {
                self.buffers[index] = Some(payload.trim_start_matches([' ', '\t']).to_string());
            }
            None => {
                if self.poisoned.is_none() {
                    self.poisoned = Some(CandidateError::UnknownLabel(label.to_string()));
                }
            }
        }

        FeedResult::Pending
    }

    fn finish(&mut self) -> FeedResult {
        let buffers = std::mem::take(&mut self.buffers);
        let poisoned = self.poisoned.take();

        if let Some(error) = poisoned {
            return FeedResult::Malformed(error);
        }
        if buffers.iter().all(Option::is_none) {
            return FeedResult::EmptyGroup;
        }

        let mut values = [0u64; 7];
        for (index, buffer) in buffers.iter().enumerate() {
            let label = LABELS[index];
            let Some(text) = buffer else {
                return FeedResult::Malformed(CandidateError::MissingAxis { label });
            };
            match parse_sequence(text) {
                Ok(value) => values[index] = value,
                Err(source) => {
                    return FeedResult::Malformed(CandidateError::BadSequence { label, source });
                }
            }
        }

        FeedResult::Block(CandidateBlock {
            red: values[0],
            cd: values[1],
            hc: values[2],
            odd: values[3],
            c7k: values[4],
            c8k: values[5],
            c4t: values[6],
        })
    }
}

/// Label for each block field, used by validation diagnostics.
pub(crate) fn block_axes(block: &CandidateBlock) -> [(&'static str, u64); 7] {
    [
        ("RED", block.red),
        ("CD", block.cd),
        ("HC", block.hc),
        ("ODD", block.odd),
        ("7K", block.c7k),
        ("8K", block.c8k),
        ("4T", block.c4t),
    ]
}
