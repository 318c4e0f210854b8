//! Enumerates bracelet-valid sequences into a cache file.
//!
//! Writes `dbn_<bit-count>_<one-count>[_short].bin` (a little-endian u64
//! stream ending in 0) and a JSON manifest with the sequence count and a
//! checksum of the stream.
//!
//! Usage:
//!   build_sequence_cache 52 26
//!   build_sequence_cache --short 52 28 --out-dir /data/dbn

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::info;

use bracelet_cache::{cache_file_name, CacheManifest, CacheWriter};
use bracelet_core::DeBruijnGenerator;

#[derive(Parser, Debug)]
#[command(name = "build_sequence_cache")]
#[command(about = "Enumerates bracelet-valid sequences into a cache file")]
struct Args {
    /// Sequence length in bits, 2 through 64
    bit_count: u32,

    /// Required number of one bits; 0 enumerates every population
    one_count: u32,

    /// Exclude sequences containing an all-zero or all-one window
    #[arg(short, long)]
    short: bool,

    /// Directory to write the cache file and manifest into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    bracelet_runner::init_tracing();
    let args = Args::parse();

    let file_name = cache_file_name(args.bit_count, args.one_count, args.short);
    let cache_path = args.out_dir.join(&file_name);

    let mut generator = DeBruijnGenerator::new(args.bit_count, args.one_count, args.short)
        .context("invalid enumeration parameters")?;

    let mut writer = CacheWriter::create(&cache_path)
        .with_context(|| format!("cannot create cache file {}", cache_path.display()))?;

    let started = std::time::Instant::now();
    let mut written: u64 = 0;
    while let Some(sequence) = generator.next_sequence() {
        writer.append(sequence)?;
        written += 1;
        if written % 65536 == 0 {
            info!(sequences = written, "enumeration in progress");
        }
    }
    let summary = writer.finish()?;

    let manifest = CacheManifest {
        file: file_name,
        sequence_bits: args.bit_count,
        one_bits: args.one_count,
        strict: args.short,
        sequence_count: summary.sequence_count,
        sha256: summary.sha256,
        created_at: Utc::now(),
    };
    let manifest_path = CacheManifest::path_for(&cache_path);
    manifest
        .write(&manifest_path)
        .with_context(|| format!("cannot write manifest {}", manifest_path.display()))?;

    info!(
        path = %cache_path.display(),
        sequences = summary.sequence_count,
        elapsed_s = started.elapsed().as_secs(),
        "cache file complete"
    );
    Ok(())
}
