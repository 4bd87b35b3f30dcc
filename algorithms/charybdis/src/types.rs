//! Shared types used across the Charybdis library.

use crate::kernels::constants::{BLOCK_SIZE, KEY_SIZE, NUM_SUBKEYS};
use crate::kernels::portable::{load_state, store_state};
use crate::kernels::word::Matrix;
use core::fmt;
use subtle::{Choice, ConstantTimeEq};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// =============================================================================
// SIZES
// =============================================================================

/// One 512-bit cipher block.
pub type Block = [u8; BLOCK_SIZE];

/// One 256-bit master key.
pub type Key = [u8; KEY_SIZE];

/// Serialized size of a full subkey array (24 x 64 bytes).
pub const SUBKEYS_SIZE: usize = NUM_SUBKEYS * BLOCK_SIZE;

// =============================================================================
// KEY SCHEDULE VARIANT
// =============================================================================

/// Domain separation applied between two squeezes of the key schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyScheduleVariant {
    /// Counter injection, full-state XOR with a per-step constant, then `F_perm`.
    #[default]
    Hardened,
    /// Counter injection, then `F_perm`. Kept for the historical test vector.
    Legacy,
}

/// Direction of a multi-block call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

// =============================================================================
// SUBKEYS
// =============================================================================

/// The 24 expanded round subkeys `K[0]..=K[23]`.
///
/// Secret material: wiped on drop and on [`Zeroize::zeroize`].
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Subkeys {
    keys: [Matrix<u32>; NUM_SUBKEYS],
}

impl Subkeys {
    pub(crate) const fn zeroed() -> Self {
        Self { keys: [[[0u32; 4]; 4]; NUM_SUBKEYS] }
    }

    pub(crate) const fn matrices_mut(&mut self) -> &mut [Matrix<u32>; NUM_SUBKEYS] {
        &mut self.keys
    }

    /// Subkey matrices, `K[0]` first.
    #[must_use]
    pub const fn matrices(&self) -> &[Matrix<u32>; NUM_SUBKEYS] {
        &self.keys
    }

    /// Serialize subkey `index` to its 64-byte big-endian form.
    #[must_use]
    pub fn subkey_bytes(&self, index: usize) -> Option<Block> {
        let key = self.keys.get(index)?;
        let mut out = [0u8; BLOCK_SIZE];
        store_state(key, &mut out);
        Some(out)
    }

    /// Rebuild subkeys from their serialized form (24 consecutive 64-byte blocks).
    #[must_use]
    pub fn from_bytes(bytes: &[u8; SUBKEYS_SIZE]) -> Self {
        let mut keys = [[[0u32; 4]; 4]; NUM_SUBKEYS];
        let (blocks, _) = bytes.as_chunks::<BLOCK_SIZE>();
        for (key, block) in keys.iter_mut().zip(blocks) {
            *key = load_state(block);
        }
        Self { keys }
    }

    /// Serialize all 24 subkeys into `out`.
    pub fn write_bytes(&self, out: &mut [u8; SUBKEYS_SIZE]) {
        let (blocks, _) = out.as_chunks_mut::<BLOCK_SIZE>();
        for (key, block) in self.keys.iter().zip(blocks) {
            store_state(key, block);
        }
    }
}

impl ConstantTimeEq for Subkeys {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.keys
            .as_flattened()
            .as_flattened()
            .ct_eq(other.keys.as_flattened().as_flattened())
    }
}

impl fmt::Debug for Subkeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Subkeys([REDACTED])")
    }
}

// =============================================================================
// BACKENDS
// =============================================================================

/// Execution engine used for multi-block calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// 8 blocks per group in 256-bit registers.
    Avx2,
    /// One block at a time.
    Portable,
}

impl Backend {
    /// Human-readable backend name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Avx2 => "AVX2 (8-way)",
            Self::Portable => "Portable",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error for unsupported CPU features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "CPU feature '{missing}' required. The batch engine needs AVX2 with OS-enabled \
     256-bit register state. Use the scalar path instead"
)]
pub struct CpuFeatureError {
    missing: &'static str,
}

impl CpuFeatureError {
    /// Create a new `CpuFeatureError` describing the missing CPU feature.
    pub const fn new(missing: &'static str) -> Self {
        Self { missing }
    }

    /// Name of the missing feature.
    #[must_use]
    pub const fn missing(&self) -> &'static str {
        self.missing
    }
}

/// Failures reported by the cipher API. Every check runs before any output
/// byte is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Buffer length is zero or not a multiple of the 64-byte block.
    #[error("buffer length {len} is not a positive multiple of 64 bytes")]
    InvalidLength {
        /// Offending length in bytes.
        len: usize,
    },
    /// Input and output buffers differ in length.
    #[error("input length {input} does not match output length {output}")]
    LengthMismatch {
        /// Input length in bytes.
        input: usize,
        /// Output length in bytes.
        output: usize,
    },
    /// Wide-SIMD capability absent.
    #[error(transparent)]
    CpuFeature(#[from] CpuFeatureError),
    /// Batch context validity tag mismatch.
    #[error("batch context failed its validity check")]
    InvalidContext,
}

/// Failure of the built-in known-answer self-test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelfTestError {
    /// An engine produced the wrong ciphertext.
    #[error("{engine}: ciphertext mismatch on vector '{vector}'")]
    Ciphertext {
        /// Engine under test.
        engine: Backend,
        /// Vector name.
        vector: &'static str,
    },
    /// Decryption did not restore the plaintext.
    #[error("{engine}: round-trip failure on vector '{vector}'")]
    RoundTrip {
        /// Engine under test.
        engine: Backend,
        /// Vector name.
        vector: &'static str,
    },
    /// The cipher API rejected a well-formed call.
    #[error(transparent)]
    Cipher(#[from] CipherError),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_subkeys() -> Subkeys {
        let mut sk = Subkeys::zeroed();
        let mut n = 0u32;
        for cell in sk.matrices_mut().as_flattened_mut().as_flattened_mut() {
            *cell = n;
            n = n.wrapping_add(0x0101_0101);
        }
        sk
    }

    #[test]
    fn test_subkey_bytes_are_big_endian() {
        let sk = counting_subkeys();
        let k0 = sk.subkey_bytes(0).unwrap_or([0xFF; BLOCK_SIZE]);
        assert_eq!(&k0[..8], &[0, 0, 0, 0, 1, 1, 1, 1]);
        assert!(sk.subkey_bytes(NUM_SUBKEYS).is_none());
    }

    #[test]
    fn test_serialization_round_trip() {
        let sk = counting_subkeys();
        let mut bytes = [0u8; SUBKEYS_SIZE];
        sk.write_bytes(&mut bytes);
        let back = Subkeys::from_bytes(&bytes);
        assert!(bool::from(sk.ct_eq(&back)));
    }

    #[test]
    fn test_zeroize_clears_every_word() {
        let mut sk = counting_subkeys();
        sk.zeroize();
        assert!(sk.matrices().as_flattened().as_flattened().iter().all(|&w| w == 0));
    }

    #[test]
    fn test_debug_redacts() {
        let sk = counting_subkeys();
        assert_eq!(format!("{sk:?}"), "Subkeys([REDACTED])");
    }
}
