//! Candidate block emission.
//!
//! The text layout is a stable contract with the deck realizer: labelled
//! 52-digit lines, `Found` progress lines that readers discard, and a blank
//! line closing each block.

use std::io::Write;

use bracelet_core::bits::{format_bits, SEQUENCE_BITS};

use crate::driver::CandidateBundle;

pub const SUIT_HEADER: &str = "Found suit sequences.";
pub const ODD_HEADER: &str = "Found odd sequence candidate.";

/// Writes one labelled sequence line: `<label> sequence:  <52 digits>`.
pub fn write_sequence_line(
    out: &mut dyn Write,
    label: &str,
    sequence: u64,
) -> std::io::Result<()> {
    writeln!(out, "{label} sequence:  {}", format_bits(sequence, SEQUENCE_BITS))
}

/// Writes a full candidate block, blank line included.
pub fn write_bundle(out: &mut dyn Write, bundle: &CandidateBundle) -> std::io::Result<()> {
    write_sequence_line(out, " 7K", bundle.c7k)?;
    if let Some(c8k) = bundle.c8k {
        write_sequence_line(out, " 8K", c8k)?;
    }
    if let Some(c4t) = bundle.c4t {
        write_sequence_line(out, " 4T", c4t)?;
    }
    write_sequence_line(out, "ODD", bundle.odd)?;
    write_sequence_line(out, "RED", bundle.red)?;
    write_sequence_line(out, " CD", bundle.cd)?;
    write_sequence_line(out, " HC", bundle.hc)?;
    writeln!(out)
}
