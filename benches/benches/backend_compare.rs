//! Backend Comparison Benchmark
//!
//! Compares the dispatching API against the explicit AVX2 batch context and
//! the portable kernel. Validates the cost of the scalar fallback.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use charybdis::{kernels, Block, Charybdis};

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("Charybdis Backends");
    let key = [0x42u8; 32];
    let cipher = Charybdis::new(&key);

    // Scenarios:
    // - 1 block: scalar tail only
    // - 8 blocks: exactly one AVX2 group
    // - 4096 blocks (256KB): bulk throughput
    let counts = [1usize, 8, 4096];

    for n in counts {
        let input: Vec<Block> = vec![[0u8; 64]; n];
        group.throughput(Throughput::Bytes((n * 64) as u64));

        // 1. Dispatching API (production path)
        group.bench_function(format!("Dispatch (Default) - {n} blocks"), |b| {
            let mut buf = input.as_flattened().to_vec();
            b.iter(|| cipher.encrypt_blocks(black_box(&mut buf)).unwrap());
        });

        // 2. AVX2 batch context, bypasses the byte-buffer validation
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        if let Some(batch) = cipher.batch() {
            group.bench_function(format!("AVX2 Batch - {n} blocks"), |b| {
                let mut buf = input.clone();
                b.iter(|| batch.encrypt_blocks(black_box(&mut buf)).unwrap());
            });
        }

        // 3. Portable, one block at a time
        // Baseline to quantify the speedup from the 8-way engine
        group.bench_function(format!("Portable (No SIMD) - {n} blocks"), |b| {
            let mut buf = input.clone();
            b.iter(|| kernels::portable::encrypt_blocks(black_box(&mut buf), cipher.subkeys()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
