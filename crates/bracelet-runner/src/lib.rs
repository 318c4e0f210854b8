//! # Bracelet Runner
//!
//! Shared plumbing for the pipeline binaries. The binaries write their
//! data (candidate blocks, deck reports) to stdout; all logging goes to
//! stderr so output can be piped between stages.

use tracing_subscriber::EnvFilter;

/// Initializes stderr-bound logging. `RUST_LOG` overrides the default
/// `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
