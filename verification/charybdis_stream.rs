//! # `PractRand` Stream Generator
//!
//! Writes an endless stream of ciphertext to stdout for `PractRand` testing.
//!
//! Each batch encrypts consecutive big-endian block counters under a fixed
//! key. Batches go through the multi-block API, so the AVX2 engine is the one
//! under test when available.

use std::io::{self, Write};

use charybdis::Charybdis;

/// Blocks per batch (one 64 KiB parallel work unit).
const BATCH_BLOCKS: usize = 1024;

/// Entry point for the `PractRand` stream generator.
fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Optional first argument: key byte repeated 32 times (default 0).
    let key_byte = args.get(1).and_then(|s| s.parse::<u8>().ok()).unwrap_or(0);
    let cipher = Charybdis::new(&[key_byte; 32]);
    eprintln!("charybdis_stream: key byte {key_byte}, backend {}", cipher.backend());

    let mut counter: u128 = 0;
    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());
    let mut buffer = vec![0u8; BATCH_BLOCKS * 64];

    loop {
        for block in buffer.chunks_exact_mut(64) {
            block.fill(0);
            block[48..].copy_from_slice(&counter.to_be_bytes());
            counter = counter.wrapping_add(1);
        }

        if cipher.encrypt_blocks(&mut buffer).is_err() {
            break;
        }
        if handle.write_all(&buffer).is_err() {
            break;
        }
    }
}
