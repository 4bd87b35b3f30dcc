#![cfg_attr(not(feature = "std"), no_std)]

//! # Charybdis
//!
//! 512-bit ARX block cipher with a 256-bit key, 22 rounds and a sponge-based
//! key schedule. Bulk work runs on an AVX2 engine that processes 8 blocks per
//! group and is bit-identical to the scalar path.

//! # Usage
//! ```rust
//! use charybdis::Charybdis;
//!
//! let cipher = Charybdis::new(&[0x42; 32]);
//!
//! // 1. Single block
//! let mut block = [0u8; 64];
//! cipher.encrypt_block(&mut block);
//! cipher.decrypt_block(&mut block);
//! assert_eq!(block, [0u8; 64]);
//!
//! // 2. Many blocks (AVX2 when available)
//! let mut data = vec![7u8; 64 * 100];
//! cipher.encrypt_blocks(&mut data)?;
//! cipher.decrypt_blocks(&mut data)?;
//! assert!(data.iter().all(|&b| b == 7));
//!
//! // 3. Known-answer check
//! assert!(charybdis::self_test().is_ok());
//! # Ok::<(), charybdis::CipherError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod cipher;
mod engine;
#[cfg(feature = "std")]
mod ffi;
// Public for tests and benches, hidden from docs
#[doc(hidden)]
pub mod kernels;
mod selftest;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use cipher::{decrypt_block, encrypt_block, key_schedule, key_schedule_with, Charybdis};
pub use engine::{active_backend, avx2_available};
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub use kernels::avx2::BatchContext;
pub use kernels::constants::{BLOCK_SIZE, KEY_SIZE, NUM_SUBKEYS, ROUNDS};
pub use selftest::{self_test, KnownAnswer, KNOWN_ANSWERS, REFERENCE_KEY, REFERENCE_PLAINTEXT};
pub use types::{
    Backend, Block, CipherError, CpuFeatureError, Key, KeyScheduleVariant, SelfTestError,
    Subkeys, SUBKEYS_SIZE,
};
