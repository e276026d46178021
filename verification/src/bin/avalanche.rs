//! # Avalanche Audit
//!
//! Strict Avalanche Criterion (SAC) audit of the sponge.
//!
//! For every sampled message and every input bit, the bit is flipped and the
//! two digests are compared. Each (input bit, output bit) pair accumulates a
//! flip count, from which per-output-bit bias is derived. A sound schedule
//! flips every output bit with probability 1/2.

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use vortex::kernels::permutation::{adjacent_peer, butterfly_peer};
use vortex::{PeerFn, Sponge, DOMAIN_SEPARATOR, HASH_SIZE, ROUNDS};

/// Number of output bits per digest.
const OUT_BITS: usize = HASH_SIZE * 8;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Schedule {
    /// Distance 1, 2, 4, 8 pairing (production)
    Butterfly,
    /// Fixed neighbour pairing (lane-isolation baseline)
    Adjacent,
}

impl Schedule {
    fn peer(self) -> PeerFn {
        match self {
            Self::Butterfly => butterfly_peer,
            Self::Adjacent => adjacent_peer,
        }
    }
}

#[derive(Parser)]
#[command(name = "avalanche")]
#[command(about = "Strict avalanche audit for VORTEX-512", long_about = None)]
struct Args {
    /// Random messages to sample
    #[arg(short = 'n', long, default_value_t = 64)]
    samples: usize,

    /// Message length in bytes
    #[arg(short, long, default_value_t = 64)]
    len: usize,

    /// Permutation rounds per call (1..=12)
    #[arg(short, long, default_value_t = ROUNDS)]
    rounds: usize,

    /// Peer schedule
    #[arg(short, long, value_enum, default_value_t = Schedule::Butterfly)]
    schedule: Schedule,

    /// Maximum tolerated per-output-bit bias
    #[arg(short, long, default_value_t = 0.05)]
    threshold: f64,

    /// RNG seed for reproducible runs
    #[arg(long, default_value_t = 0x5EED)]
    seed: u64,
}

// =============================================================================
// STATISTICS
// =============================================================================

/// Flip counts for every (input bit, output bit) pair.
struct Stats {
    input_bits: usize,
    samples: usize,
    chart: Vec<u32>,
    total_flips: u64,
}

impl Stats {
    fn new(input_bits: usize) -> Self {
        Self {
            input_bits,
            samples: 0,
            chart: vec![0; input_bits * OUT_BITS],
            total_flips: 0,
        }
    }

    fn accumulate(&mut self, in_bit: usize, a: &[u8; HASH_SIZE], b: &[u8; HASH_SIZE]) {
        let row = &mut self.chart[in_bit * OUT_BITS..(in_bit + 1) * OUT_BITS];
        for (out_bit, cell) in row.iter_mut().enumerate() {
            let flipped = (a[out_bit / 8] ^ b[out_bit / 8]) >> (out_bit % 8) & 1;
            *cell += u32::from(flipped);
            self.total_flips += u64::from(flipped);
        }
    }

    /// Mean number of output bits flipped per single-bit input flip.
    #[allow(clippy::cast_precision_loss)]
    fn mean_flipped_bits(&self) -> f64 {
        self.total_flips as f64 / (self.samples * self.input_bits) as f64
    }

    /// Mean |2p - 1| over all cells.
    #[allow(clippy::cast_precision_loss)]
    fn average_bias(&self) -> f64 {
        let norm = 1.0 / self.samples as f64;
        let sum: f64 = self
            .chart
            .iter()
            .map(|&flips| p_to_bias(f64::from(flips) * norm))
            .sum();
        sum / self.chart.len() as f64
    }

    /// Worst |2p - 1| of any output bit, aggregated over all input bits.
    #[allow(clippy::cast_precision_loss)]
    fn worst_output_bias(&self) -> (usize, f64) {
        let norm = 1.0 / (self.samples * self.input_bits) as f64;
        (0..OUT_BITS)
            .map(|out_bit| {
                let flips: u64 = (0..self.input_bits)
                    .map(|in_bit| u64::from(self.chart[in_bit * OUT_BITS + out_bit]))
                    .sum();
                (out_bit, p_to_bias(flips as f64 * norm))
            })
            .fold((0, 0.0), |worst, cur| if cur.1 > worst.1 { cur } else { worst })
    }
}

fn p_to_bias(p: f64) -> f64 {
    (p * 2.0 - 1.0).abs()
}

fn digest(msg: &[u8], rounds: usize, peer: PeerFn) -> [u8; HASH_SIZE] {
    Sponge::with_params(DOMAIN_SEPARATOR, rounds, peer)
        .absorb_message(msg)
        .digest()
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.len == 0 || args.samples == 0 {
        bail!("--len and --samples must be positive");
    }
    if args.rounds == 0 || args.rounds > ROUNDS {
        bail!("--rounds must be in 1..={ROUNDS}");
    }

    let peer = args.schedule.peer();
    let input_bits = args.len * 8;
    let mut stats = Stats::new(input_bits);
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut msg = vec![0u8; args.len];

    info!(
        samples = args.samples,
        len = args.len,
        rounds = args.rounds,
        schedule = ?args.schedule,
        "starting avalanche audit"
    );

    for sample in 0..args.samples {
        rng.fill(&mut msg[..]);
        let base = digest(&msg, args.rounds, peer);

        for in_bit in 0..input_bits {
            msg[in_bit / 8] ^= 1 << (in_bit % 8);
            let flipped = digest(&msg, args.rounds, peer);
            msg[in_bit / 8] ^= 1 << (in_bit % 8);
            stats.accumulate(in_bit, &base, &flipped);
        }
        stats.samples += 1;
        debug!(sample, "sample done");
    }

    let mean = stats.mean_flipped_bits();
    let avg_bias = stats.average_bias();
    let (worst_bit, worst_bias) = stats.worst_output_bias();

    println!("schedule            : {:?}", args.schedule);
    println!("rounds              : {}", args.rounds);
    println!("samples x bits      : {} x {}", args.samples, input_bits);
    println!("mean flipped bits   : {mean:.2} / {OUT_BITS}");
    println!("average cell bias   : {avg_bias:.4}");
    println!("worst output bias   : {worst_bias:.4} (bit {worst_bit})");

    if worst_bias > args.threshold {
        println!("result              : FAIL (threshold {})", args.threshold);
        bail!("avalanche bias {worst_bias:.4} exceeds {}", args.threshold);
    }
    println!("result              : PASS (threshold {})", args.threshold);

    Ok(())
}
