//! Permutation Benchmark
//!
//! Cost of a single 1024-bit permutation call, at full and reduced round
//! counts and under both peer schedules.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use vortex::kernels::permutation::{adjacent_peer, butterfly_peer, permute, permute_rounds};
use vortex::kernels::state::LaneState;
use vortex::{BLOCK_SIZE, ROUNDS};

fn seeded_state() -> LaneState {
    let mut lanes = [0u64; 16];
    let mut x = 0x0123_4567_89AB_CDEFu64;
    for lane in &mut lanes {
        x = x.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        *lane = x;
    }
    LaneState::from_lanes(lanes)
}

fn bench_permutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Permutation");
    // One call absorbs one block
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));

    group.bench_function("permute (12 rounds)", |b| {
        let mut state = seeded_state();
        b.iter(|| permute(black_box(&mut state)));
    });

    for rounds in [4, 8, ROUNDS] {
        group.bench_with_input(BenchmarkId::new("butterfly", rounds), &rounds, |b, &r| {
            let mut state = seeded_state();
            b.iter(|| permute_rounds(black_box(&mut state), r, butterfly_peer));
        });
        group.bench_with_input(BenchmarkId::new("adjacent", rounds), &rounds, |b, &r| {
            let mut state = seeded_state();
            b.iter(|| permute_rounds(black_box(&mut state), r, adjacent_peer));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_permutation);
criterion_main!(benches);
