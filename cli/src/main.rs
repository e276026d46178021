//! VORTEX CLI
//!
//! `sha512sum`-style command-line front end for the VORTEX-512 hash.

mod commands;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use commands::{check_mode, hash_files, hash_string, selftest};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "vortex")]
#[command(about = "512-bit ARX sponge hash", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand); `-` reads stdin
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Hash a literal string instead of files
    #[arg(short, long, value_name = "TEXT", conflicts_with = "files")]
    string: Option<String>,

    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like sha512sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
    /// Print reference vectors and a throughput estimate
    Selftest {
        /// Size of the throughput buffer in MiB
        #[arg(long, default_value_t = 16)]
        mib: usize,
    },
}

// =============================================================================
// LOGGING
// =============================================================================

/// Logs go to stderr; stdout carries only digests and check results.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file)?,
        Some(Commands::Selftest { mib }) => selftest(*mib)?,
        None => {
            if let Some(text) = &cli.string {
                hash_string(text);
            } else if cli.files.is_empty() {
                bail!("No files specified\nUsage: vortex [FILE]... or vortex --help");
            } else {
                hash_files(&cli.files)?;
            }
        }
    }

    Ok(())
}
