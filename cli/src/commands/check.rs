//! Check Command
//!
//! Verify checksums from file (like sha512sum -c).

use super::hash::hash_path;
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use subtle::ConstantTimeEq;
use tracing::{debug, info, warn};
use vortex::HASH_SIZE;

// =============================================================================
// PARSING
// =============================================================================

/// One `hash  filename` entry.
struct Entry<'a> {
    expected: [u8; HASH_SIZE],
    path: &'a str,
}

/// Parse a checksum line. Malformed lines yield `Err` with a reason.
fn parse_line(line: &str) -> Result<Entry<'_>> {
    // Format: "hash  filename" (two spaces)
    let (hex_hash, path) = line
        .split_once("  ")
        .context("expected `<hex digest>  <path>`")?;

    let bytes = hex::decode(hex_hash.trim()).context("digest is not valid hex")?;
    let expected = vortex::digest_from_slice(&bytes)?;

    Ok(Entry {
        expected,
        path: path.trim(),
    })
}

// =============================================================================
// CHECK
// =============================================================================

/// Outcome of one checksum file run.
struct Summary {
    total: usize,
    failed: usize,
    malformed: usize,
}

/// Verify checksums from a checksum file.
pub fn check_mode(checksum_file: &Path) -> Result<()> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let Summary {
        total,
        failed,
        malformed,
    } = check_lines(BufReader::new(file))?;

    if malformed > 0 {
        eprintln!("WARNING: {malformed} line(s) are improperly formatted");
    }
    if total == 0 {
        bail!(
            "{}: no properly formatted VORTEX checksum lines found",
            checksum_file.display()
        );
    }

    println!();
    if failed == 0 {
        println!("All {total} checksums verified");
        info!(total, "check complete");
    } else {
        eprintln!("WARNING: {failed} of {total} checksums did NOT match");
        std::process::exit(1);
    }

    Ok(())
}

/// Check every entry of a checksum listing.
fn check_lines<R: BufRead>(reader: R) -> Result<Summary> {
    let mut total = 0;
    let mut failed = 0;
    let mut malformed = 0;

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let entry = match parse_line(line) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(line = lineno + 1, "skipping malformed checksum line: {e:#}");
                malformed += 1;
                continue;
            }
        };
        total += 1;
        debug!(path = entry.path, "checking");

        match hash_path(Path::new(entry.path)) {
            Ok(actual) => {
                if bool::from(actual[..].ct_eq(&entry.expected[..])) {
                    println!("{}: OK", entry.path);
                } else {
                    println!("{}: FAILED", entry.path);
                    failed += 1;
                }
            }
            Err(e) => {
                println!("{}: FAILED ({e:#})", entry.path);
                failed += 1;
            }
        }
    }

    Ok(Summary {
        total,
        failed,
        malformed,
    })
}
