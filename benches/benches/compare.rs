//! Comparison Benchmark
//!
//! VORTEX-512 against SHA-512 and BLAKE3 on identical inputs.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use sha2::{Digest, Sha512};
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("VORTEX vs SHA-512 vs BLAKE3");

    // Scenarios:
    // - 64B: one block plus the padding block
    // - 1KB: L1 cache hot-path
    // - 1MB: bulk absorb throughput
    let sizes = [64, 1024, 1024 * 1024];

    for size in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("vortex-512", size), &input, |b, data| {
            b.iter(|| vortex::hash(black_box(data)));
        });

        group.bench_with_input(BenchmarkId::new("sha-512", size), &input, |b, data| {
            b.iter(|| Sha512::digest(black_box(data)));
        });

        group.bench_with_input(BenchmarkId::new("blake3", size), &input, |b, data| {
            b.iter(|| blake3::hash(black_box(data)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compare);
criterion_main!(benches);
