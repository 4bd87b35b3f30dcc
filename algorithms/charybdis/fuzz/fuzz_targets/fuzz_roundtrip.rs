#![no_main]

use libfuzzer_sys::fuzz_target;
use charybdis::{key_schedule_with, KeyScheduleVariant};

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // First 32 bytes form the key, the rest is cut into blocks.
    if data.len() < 32 {
        return;
    }
    let mut key = [0u8; 32];
    key.copy_from_slice(&data[..32]);

    // =============================================================================
    // 1. BOTH SCHEDULES
    // =============================================================================

    for variant in [KeyScheduleVariant::Hardened, KeyScheduleVariant::Legacy] {
        let subkeys = key_schedule_with(&key, variant);
        for chunk in data[32..].chunks_exact(64) {
            let mut block = [0u8; 64];
            block.copy_from_slice(chunk);
            let original = block;

            charybdis::encrypt_block(&mut block, &subkeys);
            charybdis::decrypt_block(&mut block, &subkeys);
            assert_eq!(block, original, "round trip failed under {variant:?}");
        }
    }
});
