//! VORTEX Criterion Benchmark
//!
//! Latency and throughput of the public API across input sizes.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for small inputs (IDs, keys). Sizes straddle the
/// 64-byte block boundary.
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [
        (0, "0B"),
        (16, "16B"),
        (63, "63B"),
        (64, "64B"),
        (256, "256B"),
        (KB, "1KB"),
        (4 * KB, "4KB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| vortex::hash(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK
// =============================================================================

/// Throughput for file-sized inputs.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk");
    group.sample_size(30);

    let sizes = [
        (64 * KB, "64KB"),
        (MB, "1MB"),
        (16 * MB, "16MB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| vortex::hash(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: STREAMING
// =============================================================================

/// Throughput for incremental updates (network streams, file hashing).
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Streaming");
    group.sample_size(50);

    let test_cases = [
        (MB, 7, "1MB-7B-chunks"),
        (MB, 4 * KB, "1MB-4KB-chunks"),
        (MB, 128 * KB, "1MB-128KB-chunks"),
    ];

    for (total_size, chunk_size, name) in test_cases {
        let input = random_input(total_size);
        group.throughput(Throughput::Bytes(total_size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &(input, chunk_size),
            |b, (data, chunk_sz)| {
                b.iter(|| {
                    let mut hasher = vortex::Hasher::new();
                    for chunk in data.chunks(*chunk_sz) {
                        hasher.update(black_box(chunk));
                    }
                    hasher.finalize()
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: SPECIAL OPERATIONS
// =============================================================================

/// Extendable output and constant-time verification.
fn bench_special_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Special-Operations");

    let input = random_input(64 * KB);
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("regular-hash", |b| {
        b.iter(|| vortex::hash(black_box(&input)))
    });

    // XOF: 1 KiB of output costs 15 extra permutations
    group.bench_function("xof-1KB", |b| {
        let mut out = vec![0u8; KB];
        b.iter(|| vortex::hash_xof(black_box(&input), black_box(&mut out)))
    });

    let hash = vortex::hash(&input);
    group.bench_function("verify", |b| {
        b.iter(|| vortex::verify(black_box(&input), black_box(&hash)))
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 5: BATCH THREAD SCALING
// =============================================================================

/// Multi-core scaling of `hash_batch` using Rayon (1 to N threads).
#[cfg(feature = "multithread")]
fn bench_batch_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("5-Batch-Scaling");
    group.sample_size(30);

    let messages: Vec<Vec<u8>> = (0..1024).map(|_| random_input(4 * KB)).collect();
    group.throughput(Throughput::Bytes((messages.len() * 4 * KB) as u64));

    let max_threads = num_cpus::get();
    let thread_counts: Vec<usize> = [1, 2, 4, 8, 16, 32]
        .iter()
        .copied()
        .filter(|&t| t <= max_threads)
        .collect();

    for threads in thread_counts {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(format!("{threads}threads")),
            &threads,
            |b, &t| {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(t)
                    .build()
                    .unwrap();
                pool.install(|| b.iter(|| vortex::hash_batch(black_box(&messages))));
            },
        );
    }
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_bulk,
    bench_streaming,
    bench_special_operations,
);

#[cfg(feature = "multithread")]
criterion_group!(benches_multithread, bench_batch_scaling);

#[cfg(feature = "multithread")]
criterion_main!(benches, benches_multithread);

#[cfg(not(feature = "multithread"))]
criterion_main!(benches);
