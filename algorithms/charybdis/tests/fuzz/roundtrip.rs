use bolero::check;
use charybdis::{Charybdis, KeyScheduleVariant};

#[test]
fn fuzz_block_roundtrip() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // PREPARATION
        // =============================================================================

        // Layout: key (32) | block (64) | schedule selector (1), zero-padded.
        let mut input = [0u8; 97];
        let n = data.len().min(input.len());
        input[..n].copy_from_slice(&data[..n]);

        let mut key = [0u8; 32];
        let mut block = [0u8; 64];
        key.copy_from_slice(&input[..32]);
        block.copy_from_slice(&input[32..96]);
        let variant = if input[96] & 1 == 1 {
            KeyScheduleVariant::Legacy
        } else {
            KeyScheduleVariant::Hardened
        };
        let cipher = Charybdis::with_schedule(&key, variant);

        // =============================================================================
        // ROUND TRIP
        // =============================================================================

        let mut ct = block;
        cipher.encrypt_block(&mut ct);

        let mut out = [0u8; 64];
        cipher.encrypt_block_b2b(&block, &mut out);
        assert_eq!(ct, out, "b2b and in-place ciphertext differ");

        cipher.decrypt_block(&mut ct);
        assert_eq!(ct, block, "decrypt(encrypt(x)) != x");
    });
}
