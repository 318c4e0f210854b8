//! Realizes decks from candidate bundles under the uplus2 scheme
//! (92/T2/6Q axes; pairs A/K, 3/5, 6/8, 10/Q).
//!
//! Reads the same candidate files as `make_decks`; the 7K/8K/4T payloads
//! are reinterpreted as the 92/T2/6Q axes.
//!
//! Usage:
//!   plus_two_decks candidates.txt
//!   plus_two_decks --all --cut --eight --input candidates.txt

use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use bracelet_decks::{process_candidates, DeckRunOptions, UPLUS2};

#[derive(Parser, Debug)]
#[command(name = "plus_two_decks")]
#[command(about = "Builds deck orderings from axis bundles under the uplus2 scheme")]
struct Args {
    /// Candidate file produced by search_axes
    candidate_file: PathBuf,

    /// Skip this many candidate groups before processing
    #[arg(short, long, default_value_t = 0)]
    skip: u64,

    /// Also test the unusual value subsets (primes, Fibonacci, Lucas)
    #[arg(short, long)]
    all: bool,

    /// Rotate the display so the nine of diamonds sits on the bottom
    #[arg(short, long)]
    cut: bool,

    /// Only display decks supporting at least eight predicates
    #[arg(short, long)]
    eight: bool,

    /// Echo the input sequences rotated to match the displayed deck
    #[arg(short = 'i', long = "input")]
    show_input: bool,
}

fn main() -> Result<()> {
    bracelet_runner::init_tracing();
    let args = Args::parse();

    let file = std::fs::File::open(&args.candidate_file).with_context(|| {
        format!("cannot open candidate file {}", args.candidate_file.display())
    })?;

    let options = DeckRunOptions {
        skip_groups: args.skip,
        find_all: args.all,
        cut_nine_of_diamonds: args.cut,
        require_eight: args.eight,
        show_input_sequences: args.show_input,
    };

    let mut stdout = std::io::stdout().lock();
    let stats = process_candidates(BufReader::new(file), &UPLUS2, &options, &mut stdout)
        .context("candidate processing failed")?;

    info!(
        groups = stats.groups,
        realized = stats.realized,
        displayed = stats.displayed,
        "plus_two_decks finished"
    );
    Ok(())
}
