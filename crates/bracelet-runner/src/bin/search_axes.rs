//! Searches the cached primitives for compatible axis bundles.
//!
//! Candidate blocks go to stdout (or `--output`); pipe them to
//! `make_decks` or `plus_two_decks` for realization. The cache directory
//! is taken from the `DBNPATH` environment variable.
//!
//! Usage:
//!   search_axes --c8k --sep --c4t > candidates.txt
//!   search_axes --red 1000 --output candidates.txt --manifest run.json

use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use uuid::Uuid;

use bracelet_cache::{CachePaths, SequenceStore};
use bracelet_search::{run_search, RunManifest, SearchOptions};

#[derive(Parser, Debug)]
#[command(name = "search_axes")]
#[command(about = "Searches cached primitives for compatible axis bundles")]
struct Args {
    /// Skip this many HD sequences before searching
    #[arg(short = 'r', long = "red", default_value_t = 0)]
    red_skip: usize,

    /// Skip this many CD sequences on the first pass
    #[arg(short = 'c', long = "cd", default_value_t = 0)]
    cd_skip: usize,

    /// Skip this many ODD sequences on the first pass
    #[arg(short = 'o', long = "odd", default_value_t = 0)]
    odd_skip: usize,

    /// Skip this many 7K sequences on the first pass
    #[arg(short = 'k', long = "c7k", default_value_t = 0)]
    c7k_skip: usize,

    /// Use the value cache without all-zero or all-one windows
    #[arg(short = 'n', long)]
    valshort: bool,

    /// Use the suit cache without all-zero or all-one windows
    #[arg(short = 's', long)]
    suitshort: bool,

    /// Synthesize an 8K axis for every candidate
    #[arg(short = 'e', long)]
    c8k: bool,

    /// Require the four 8K-cleared bits to sit at least six apart
    #[arg(short = 'p', long = "sep")]
    sevens_apart: bool,

    /// Synthesize a 4T axis for every candidate
    #[arg(short = 't', long)]
    c4t: bool,

    /// Write candidate blocks here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write a JSON run summary here when the search finishes
    #[arg(long)]
    manifest: Option<PathBuf>,
}

fn main() -> Result<()> {
    bracelet_runner::init_tracing();
    let args = Args::parse();

    if args.sevens_apart && !args.c8k {
        anyhow::bail!("--sep only applies when --c8k is requested");
    }

    let paths = CachePaths::from_env()
        .context("the DBNPATH environment variable must name the cache directory")?;

    let options = SearchOptions {
        red_skip: args.red_skip,
        cd_skip: args.cd_skip,
        odd_skip: args.odd_skip,
        c7k_skip: args.c7k_skip,
        strict_suit_windows: args.suitshort,
        strict_value_windows: args.valshort,
        with_c8k: args.c8k,
        sevens_apart: args.sevens_apart,
        with_c4t: args.c4t,
    };

    let mut sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            std::fs::File::create(path)
                .with_context(|| format!("cannot create output file {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };

    let started_at = Utc::now();
    let mut store = SequenceStore::new();
    let stats = run_search(&mut store, &paths, &options, &mut sink)
        .context("compound search failed")?;
    sink.flush()?;

    if let Some(path) = &args.manifest {
        let manifest = RunManifest {
            run_id: Uuid::new_v4().to_string(),
            started_at,
            finished_at: Utc::now(),
            options,
            stats,
        };
        manifest
            .write(path)
            .with_context(|| format!("cannot write run manifest {}", path.display()))?;
    }

    Ok(())
}
