#![no_main]

use libfuzzer_sys::fuzz_target;
use charybdis::Charybdis;

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    let cipher = Charybdis::new(&[0xC3u8; 32]);
    let whole = data.len() / 64 * 64;
    if whole == 0 {
        return;
    }
    let input = &data[..whole];

    // =============================================================================
    // 1. BATCH ENGINE VS SCALAR REFERENCE
    // =============================================================================

    let mut batch = input.to_vec();
    cipher.encrypt_blocks(&mut batch).unwrap_or_else(|e| panic!("{e}"));

    let mut scalar = input.to_vec();
    for block in scalar.as_chunks_mut::<64>().0 {
        cipher.encrypt_block(block);
    }
    assert_eq!(batch, scalar, "engine mismatch on {} blocks", whole / 64);

    // =============================================================================
    // 2. PARALLEL PATH
    // =============================================================================

    let mut parallel = input.to_vec();
    cipher.encrypt_blocks_parallel(&mut parallel).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(parallel, scalar, "parallel mismatch");
});
