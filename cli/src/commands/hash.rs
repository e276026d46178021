//! Hash Command
//!
//! File hashing with automatic parallelization via Rayon.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use vortex::HASH_SIZE;

/// Read size for streaming input into the hasher.
const READ_BUFFER: usize = 128 * 1024;

/// Stream a reader through `vortex::Hasher`.
pub fn hash_reader<R: Read>(mut reader: R) -> Result<[u8; HASH_SIZE]> {
    let mut hasher = vortex::Hasher::new();
    let mut buffer = vec![0u8; READ_BUFFER];

    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hasher.finalize())
}

/// Hash a file path, or stdin for `-`.
pub fn hash_path(path: &Path) -> Result<[u8; HASH_SIZE]> {
    if path.as_os_str() == "-" {
        return hash_reader(std::io::stdin().lock()).context("Failed to read stdin");
    }
    let file = File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    hash_reader(file).with_context(|| format!("Failed to read: {}", path.display()))
}

/// Hash files (Rayon parallelizes automatically when beneficial).
pub fn hash_files(files: &[PathBuf]) -> Result<()> {
    // `collect` keeps the original order
    let results: Vec<(&PathBuf, Result<[u8; HASH_SIZE]>)> = files
        .par_iter()
        .map(|path| {
            debug!(path = %path.display(), "hashing");
            (path, hash_path(path))
        })
        .collect();

    let mut failed = 0usize;
    for (path, result) in results {
        match result {
            Ok(digest) => println!("{}  {}", hex::encode(digest), path.display()),
            Err(e) => {
                eprintln!("Error: {}: {e:#}", path.display());
                failed += 1;
            }
        }
    }

    info!(files = files.len(), failed, "hash run complete");
    if failed > 0 {
        anyhow::bail!("Failed to hash {failed} file(s)");
    }

    Ok(())
}

/// Hash a literal string argument.
pub fn hash_string(text: &str) {
    println!("{}  \"{text}\"", hex::encode(vortex::hash(text.as_bytes())));
}
