//! Selftest Command
//!
//! Prints the reference vectors and a single-thread throughput estimate.

use anyhow::{ensure, Context, Result};
use rand::prelude::*;
use std::hint::black_box;
use std::time::Instant;
use tracing::info;

/// Regression anchor for `hash(b"")`.
const EMPTY_DIGEST: &str = "68ddb072c4ef8b9e150f42bfa1c9d3a8df459264ec4e6dc5af4208f36cc4df0e\
                            023a0cfc33a526b2275b554425c636b19c4b03e2aac4eee65760e94434b87306";

/// Run the self test over a buffer of `mib` MiB.
pub fn selftest(mib: usize) -> Result<()> {
    let len = mib
        .max(1)
        .checked_mul(1024 * 1024)
        .with_context(|| format!("--mib {mib} does not fit in memory"))?;

    // =========================================================================
    // VECTORS
    // =========================================================================

    let empty = hex::encode(vortex::hash(b""));
    println!("VORTEX-512(\"\")       = {empty}");
    println!("VORTEX-512(\"VORTEX\") = {}", hex::encode(vortex::hash(b"VORTEX")));
    ensure!(empty == EMPTY_DIGEST, "empty-string vector mismatch");

    // =========================================================================
    // THROUGHPUT
    // =========================================================================

    let mut buffer = vec![0u8; len];
    rand::rng().fill(&mut buffer[..]);

    let start = Instant::now();
    let digest = vortex::hash(black_box(&buffer));
    let elapsed = start.elapsed();

    #[allow(clippy::cast_precision_loss)]
    let mib_per_sec = buffer.len() as f64 / (1024.0 * 1024.0) / elapsed.as_secs_f64();
    println!(
        "{} MiB in {:.3}s: {mib_per_sec:.1} MiB/s ({}…)",
        buffer.len() / (1024 * 1024),
        elapsed.as_secs_f64(),
        &hex::encode(digest)[..16]
    );
    info!(bytes = buffer.len(), ?elapsed, "selftest complete");

    Ok(())
}
