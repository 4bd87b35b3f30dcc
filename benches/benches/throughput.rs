//! Charybdis Comprehensive Criterion Benchmark
//!
//! Key setup, single-block latency and bulk throughput on every path.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use charybdis::Charybdis;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn random_key() -> [u8; 32] {
    let mut key = [0u8; 32];
    rand::rng().fill(&mut key[..]);
    key
}

// =============================================================================
// BENCHMARK 1: KEY SETUP
// =============================================================================

/// Cost of the sponge schedule and of building the batch context.
fn bench_key_setup(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Key-Setup");
    let key = random_key();

    group.bench_function("key-schedule-hardened", |b| {
        b.iter(|| charybdis::key_schedule(black_box(&key)))
    });
    group.bench_function("key-schedule-legacy", |b| {
        b.iter(|| {
            charybdis::key_schedule_with(black_box(&key), charybdis::KeyScheduleVariant::Legacy)
        })
    });
    group.bench_function("cipher-new", |b| b.iter(|| Charybdis::new(black_box(&key))));
    group.finish();
}

// =============================================================================
// BENCHMARK 2: LATENCY
// =============================================================================

/// Single-block encrypt and decrypt on the scalar path.
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Latency");
    let cipher = Charybdis::new(&random_key());
    let mut block = [0u8; 64];
    rand::rng().fill(&mut block[..]);
    group.throughput(Throughput::Bytes(64));

    group.bench_function("encrypt-block", |b| {
        b.iter(|| {
            let mut x = black_box(block);
            cipher.encrypt_block(&mut x);
            x
        })
    });
    group.bench_function("decrypt-block", |b| {
        b.iter(|| {
            let mut x = black_box(block);
            cipher.decrypt_block(&mut x);
            x
        })
    });
    group.finish();
}

// =============================================================================
// BENCHMARK 3: BULK
// =============================================================================

/// Multi-block throughput from one group to RAM-sized buffers.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Bulk");
    group.sample_size(50);
    let cipher = Charybdis::new(&random_key());
    println!("Backend: {}", cipher.backend());

    let sizes = [
        (512, "512B-1group"),
        (4 * KB, "4KB"),
        (64 * KB, "64KB"),
        (MB, "1MB"),
        (16 * MB, "16MB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::new("encrypt-blocks", name),
            &input,
            |b, data| {
                let mut buf = data.clone();
                b.iter(|| cipher.encrypt_blocks(black_box(&mut buf)).unwrap())
            },
        );
        group.bench_with_input(
            criterion::BenchmarkId::new("encrypt-blocks-parallel", name),
            &input,
            |b, data| {
                let mut buf = data.clone();
                b.iter(|| cipher.encrypt_blocks_parallel(black_box(&mut buf)).unwrap())
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: THREAD SCALING
// =============================================================================

/// Multi-core scaling efficiency using Rayon (1 to N threads).
#[cfg(feature = "multithread")]
fn bench_thread_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Thread-Scaling");
    group.sample_size(20);

    let cipher = Charybdis::new(&random_key());
    let size = 16 * MB;
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    group.throughput(Throughput::Bytes(size as u64));

    let max_threads = num_cpus::get();
    let thread_counts: Vec<usize> = [1, 2, 4, 8, 16, 32]
        .iter()
        .copied()
        .filter(|&t| t <= max_threads)
        .collect();

    for threads in thread_counts {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(format!("{}threads", threads)),
            &threads,
            |b, &t| {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(t)
                    .build()
                    .unwrap();
                let mut buf = input.clone();
                pool.install(|| b.iter(|| cipher.encrypt_blocks_parallel(black_box(&mut buf)).unwrap()));
            },
        );
    }
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(benches, bench_key_setup, bench_latency, bench_bulk);

#[cfg(feature = "multithread")]
criterion_group!(benches_multithread, bench_thread_scaling);

#[cfg(feature = "multithread")]
criterion_main!(benches, benches_multithread);

#[cfg(not(feature = "multithread"))]
criterion_main!(benches);
