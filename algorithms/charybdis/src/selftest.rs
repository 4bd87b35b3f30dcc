//! Known-Answer Self-Test
//!
//! Runs the two reference vectors through every engine available on this
//! host, comparing ciphertext in constant time and checking decryption.

use crate::cipher::Charybdis;
use crate::kernels::constants::{BLOCK_SIZE, KEY_SIZE};
use crate::kernels::portable;
use crate::types::{Backend, Block, Key, KeyScheduleVariant, SelfTestError};
use subtle::ConstantTimeEq;

// =============================================================================
// VECTORS
// =============================================================================

/// One known-answer vector.
#[derive(Debug, Clone, Copy)]
pub struct KnownAnswer {
    /// Short identifier.
    pub name: &'static str,
    /// Schedule the vector was generated with.
    pub variant: KeyScheduleVariant,
    /// Master key.
    pub key: Key,
    /// Plaintext block.
    pub plaintext: Block,
    /// Expected ciphertext block.
    pub ciphertext: Block,
}

/// Reference key `00 01 02 .. 1F`.
pub const REFERENCE_KEY: Key = counting_key();

/// Reference plaintext `00 11 22 .. FF` four times.
pub const REFERENCE_PLAINTEXT: Block = repeated_plaintext();

/// Reference vectors: hardened schedule first, then the published legacy one.
pub const KNOWN_ANSWERS: [KnownAnswer; 2] = [
    KnownAnswer {
        name: "reference/hardened",
        variant: KeyScheduleVariant::Hardened,
        key: REFERENCE_KEY,
        plaintext: REFERENCE_PLAINTEXT,
        ciphertext: hex_block(
            "355891336214F3D6D0DCE1821314740E697860F27E9C383F4484DD348BFF025E\
             F1857895B2CA4ED3388F9C5112AB2C96EFFF694AB3B81F68BFC9D240CAF033F4",
        ),
    },
    KnownAnswer {
        name: "reference/legacy",
        variant: KeyScheduleVariant::Legacy,
        key: REFERENCE_KEY,
        plaintext: REFERENCE_PLAINTEXT,
        ciphertext: hex_block(
            "CF669FE881E4E244A483B7E43FEFB0616A2117AB7D1C3CCBB90D1AFBF87545AD\
             84D77152DBBC378904FA1525064FE7C1C22CC93C477C9B2EB80F382C40B3211B",
        ),
    },
];

#[allow(clippy::cast_possible_truncation)]
const fn counting_key() -> Key {
    let mut key = [0u8; KEY_SIZE];
    let mut i = 0;
    while i < KEY_SIZE {
        key[i] = i as u8;
        i += 1;
    }
    key
}

#[allow(clippy::cast_possible_truncation)]
const fn repeated_plaintext() -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    let mut i = 0;
    while i < BLOCK_SIZE {
        block[i] = ((i % 16) as u8) * 0x11;
        i += 1;
    }
    block
}

const fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'F' => c - b'A' + 10,
        b'a'..=b'f' => c - b'a' + 10,
        _ => panic!("invalid hex digit"),
    }
}

const fn hex_block(s: &str) -> Block {
    let s = s.as_bytes();
    assert!(s.len() == 2 * BLOCK_SIZE, "expected 128 hex digits");
    let mut out = [0u8; BLOCK_SIZE];
    let mut i = 0;
    while i < BLOCK_SIZE {
        out[i] = (nibble(s[2 * i]) << 4) | nibble(s[2 * i + 1]);
        i += 1;
    }
    out
}

// =============================================================================
// SELF-TEST
// =============================================================================

/// Blocks in the larger batch check: one full group plus a tail. A single
/// block exercises the tail path alone.
const BATCH_CHECK_BLOCKS: usize = 11;

/// Verify every known answer on the scalar engine and, when present, the
/// AVX2 engine.
///
/// # Errors
/// The first mismatch found.
pub fn self_test() -> Result<(), SelfTestError> {
    for v in &KNOWN_ANSWERS {
        let cipher = Charybdis::with_schedule(&v.key, v.variant);

        let mut block = v.plaintext;
        portable::encrypt_block(&mut block, cipher.subkeys());
        check_block(&block, &v.ciphertext, SelfTestError::Ciphertext { engine: Backend::Portable, vector: v.name })?;
        portable::decrypt_block(&mut block, cipher.subkeys());
        check_block(&block, &v.plaintext, SelfTestError::RoundTrip { engine: Backend::Portable, vector: v.name })?;

        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        if let Some(batch) = cipher.batch() {
            let engine = Backend::Avx2;
            for count in [1, BATCH_CHECK_BLOCKS] {
                let mut storage = [v.plaintext; BATCH_CHECK_BLOCKS];
                let blocks = &mut storage[..count];
                batch.encrypt_blocks(blocks)?;
                for b in blocks.iter() {
                    check_block(b, &v.ciphertext, SelfTestError::Ciphertext { engine, vector: v.name })?;
                }
                batch.decrypt_blocks(blocks)?;
                for b in blocks.iter() {
                    check_block(b, &v.plaintext, SelfTestError::RoundTrip { engine, vector: v.name })?;
                }
            }
        }
    }
    tracing::debug!(vectors = KNOWN_ANSWERS.len(), "self-test passed");
    Ok(())
}

fn check_block(actual: &Block, expected: &Block, err: SelfTestError) -> Result<(), SelfTestError> {
    if bool::from(actual.ct_eq(expected)) {
        Ok(())
    } else {
        tracing::debug!(%err, "self-test failed");
        Err(err)
    }
}

// =============================================================================
// TESTS
// =============================================================================
