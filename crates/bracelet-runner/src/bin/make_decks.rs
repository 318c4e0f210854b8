//! Realizes decks from candidate bundles under the umake scheme
//! (7K/8K/4T axes; pairs A/3, 4/6, 8/10, J/K).
//!
//! Usage:
//!   make_decks candidates.txt
//!   make_decks --all --cut --eight --input candidates.txt

use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use bracelet_decks::{process_candidates, DeckRunOptions, UMAKE};

#[derive(Parser, Debug)]
#[command(name = "make_decks")]
#[command(about = "Builds deck orderings from searched axis bundles")]
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
    let stats = process_candidates(BufReader::new(file), &UMAKE, &options, &mut stdout)
        .context("candidate processing failed")?;

    info!(
        groups = stats.groups,
        realized = stats.realized,
        displayed = stats.displayed,
        "make_decks finished"
    );
    Ok(())
}
