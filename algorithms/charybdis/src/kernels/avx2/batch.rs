//! AVX2 Batch Context
//!
//! Owns the lane-broadcast subkeys and round constants plus a scalar copy of
//! the subkeys for the tail. Every call checks the validity tag before it
//! touches the buffers.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::inline_always)]

use super::lanes::{splat_matrix, Lanes};
use super::transpose::{load_group, store_group};
use crate::engine::dispatcher;
use crate::kernels::constants::{BATCH_LANES, NUM_SUBKEYS, ROUNDS, ROUND_CONSTANT_MATRICES};
use crate::kernels::portable;
use crate::kernels::round::{decrypt_state, encrypt_state};
use crate::kernels::word::Matrix;
use crate::types::{Block, CipherError, CpuFeatureError, Direction, Subkeys};
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(target_arch = "x86")]
use core::arch::x86::_mm256_zeroall;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::_mm256_zeroall;

/// ISA identifier, ASCII "AVX2".
const ISA_TAG: u32 = 0x4156_5832;

/// Expected tag of a live context.
const CONTEXT_TAG: u32 = ISA_TAG ^ (size_of::<BatchContext>() as u32);

// =============================================================================
// CONTEXT
// =============================================================================

/// Pre-expanded key material for the 8-way engine.
///
/// Secret material: wiped on drop and on [`BatchContext::clear`]. A cleared
/// context fails its validity check and rejects every further call.
pub struct BatchContext {
    subkeys: [Matrix<Lanes>; NUM_SUBKEYS],
    round_constants: [Matrix<Lanes>; ROUNDS],
    scalar: Subkeys,
    tag: u32,
}

impl BatchContext {
    /// Broadcast `subkeys` into lane form.
    ///
    /// # Errors
    /// [`CipherError::CpuFeature`] if the CPU or OS lacks AVX2 support.
    #[allow(unsafe_code)]
    pub fn new(subkeys: &Subkeys) -> Result<Self, CipherError> {
        if !dispatcher::avx2_available() {
            tracing::debug!("batch context unavailable: no AVX2");
            return Err(CpuFeatureError::new("avx2").into());
        }
        // SAFETY: AVX2 support verified above.
        let ctx = unsafe { Self::expand(subkeys) };
        tracing::debug!(bytes = size_of::<Self>(), "batch context created");
        Ok(ctx)
    }

    #[target_feature(enable = "avx2")]
    #[allow(unsafe_code)]
    unsafe fn expand(subkeys: &Subkeys) -> Self {
        let keys = subkeys.matrices();
        Self {
            subkeys: core::array::from_fn(|i| splat_matrix(&keys[i])),
            round_constants: core::array::from_fn(|r| splat_matrix(&ROUND_CONSTANT_MATRICES[r])),
            scalar: subkeys.clone(),
            tag: CONTEXT_TAG,
        }
    }

    /// Whether the validity tag is intact.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.tag == CONTEXT_TAG
    }

    const fn check(&self) -> Result<(), CipherError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CipherError::InvalidContext)
        }
    }

    /// Scalar subkeys used for the tail.
    #[must_use]
    pub const fn subkeys(&self) -> &Subkeys {
        &self.scalar
    }

    /// Wipe all key material and wide registers. The context is invalid afterwards.
    pub fn clear(&mut self) {
        self.zeroize();
    }

    // =========================================================================
    // PUBLIC BATCH API
    // =========================================================================

    /// Encrypt `blocks` in place.
    ///
    /// # Errors
    /// [`CipherError::InvalidContext`] on a cleared or corrupted context,
    /// [`CipherError::InvalidLength`] on an empty slice.
    pub fn encrypt_blocks(&self, blocks: &mut [Block]) -> Result<(), CipherError> {
        self.run_in_place(blocks, Direction::Encrypt)
    }

    /// Decrypt `blocks` in place.
    ///
    /// # Errors
    /// As [`BatchContext::encrypt_blocks`].
    pub fn decrypt_blocks(&self, blocks: &mut [Block]) -> Result<(), CipherError> {
        self.run_in_place(blocks, Direction::Decrypt)
    }

    /// Encrypt `input` into `output`.
    ///
    /// # Errors
    /// As [`BatchContext::encrypt_blocks`], plus [`CipherError::LengthMismatch`].
    pub fn encrypt_blocks_b2b(&self, input: &[Block], output: &mut [Block]) -> Result<(), CipherError> {
        self.run_b2b(input, output, Direction::Encrypt)
    }

    /// Decrypt `input` into `output`.
    ///
    /// # Errors
    /// As [`BatchContext::encrypt_blocks_b2b`].
    pub fn decrypt_blocks_b2b(&self, input: &[Block], output: &mut [Block]) -> Result<(), CipherError> {
        self.run_b2b(input, output, Direction::Decrypt)
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    #[allow(unsafe_code)]
    fn run_in_place(&self, blocks: &mut [Block], dir: Direction) -> Result<(), CipherError> {
        self.check()?;
        if blocks.is_empty() {
            return Err(CipherError::InvalidLength { len: 0 });
        }
        tracing::trace!(
            groups = blocks.len() / BATCH_LANES,
            tail = blocks.len() % BATCH_LANES,
            "batch call"
        );
        // SAFETY: a context with an intact tag was built after AVX2 detection.
        unsafe {
            self.process_in_place(blocks, dir);
        }
        Ok(())
    }

    #[allow(unsafe_code)]
    fn run_b2b(&self, input: &[Block], output: &mut [Block], dir: Direction) -> Result<(), CipherError> {
        self.check()?;
        if input.len() != output.len() {
            return Err(CipherError::LengthMismatch {
                input: size_of_val(input),
                output: size_of_val(output),
            });
        }
        if input.is_empty() {
            return Err(CipherError::InvalidLength { len: 0 });
        }
        // SAFETY: as in `run_in_place`.
        unsafe {
            self.process_b2b(input, output, dir);
        }
        Ok(())
    }

    // =========================================================================
    // KERNELS
    // =========================================================================

    #[inline(always)]
    fn apply(&self, state: &mut Matrix<Lanes>, dir: Direction) {
        match dir {
            Direction::Encrypt => encrypt_state(state, &self.subkeys, &self.round_constants),
            Direction::Decrypt => decrypt_state(state, &self.subkeys, &self.round_constants),
        }
    }

    fn apply_scalar(&self, block: &mut Block, dir: Direction) {
        match dir {
            Direction::Encrypt => portable::encrypt_block(block, &self.scalar),
            Direction::Decrypt => portable::decrypt_block(block, &self.scalar),
        }
    }

    #[target_feature(enable = "avx2")]
    #[allow(unsafe_code)]
    unsafe fn process_in_place(&self, blocks: &mut [Block], dir: Direction) {
        let (groups, tail) = blocks.as_chunks_mut::<BATCH_LANES>();
        for group in groups {
            let mut state = load_group(group);
            self.apply(&mut state, dir);
            store_group(&state, group);
        }
        for block in tail {
            self.apply_scalar(block, dir);
        }
        _mm256_zeroall();
    }

    #[target_feature(enable = "avx2")]
    #[allow(unsafe_code)]
    unsafe fn process_b2b(&self, input: &[Block], output: &mut [Block], dir: Direction) {
        let (in_groups, in_tail) = input.as_chunks::<BATCH_LANES>();
        let (out_groups, out_tail) = output.as_chunks_mut::<BATCH_LANES>();
        for (src, dst) in in_groups.iter().zip(out_groups) {
            let mut state = load_group(src);
            self.apply(&mut state, dir);
            store_group(&state, dst);
        }
        for (src, dst) in in_tail.iter().zip(out_tail) {
            *dst = *src;
            self.apply_scalar(dst, dir);
        }
        _mm256_zeroall();
    }
}

// =============================================================================
// SECURE ERASE
// =============================================================================

impl Zeroize for BatchContext {
    #[allow(unsafe_code)]
    fn zeroize(&mut self) {
        self.subkeys.zeroize();
        self.round_constants.zeroize();
        self.scalar.zeroize();
        self.tag.zeroize();
        if dispatcher::avx2_available() {
            // SAFETY: AVX2 support verified on the line above.
            unsafe {
                clear_wide_registers();
            }
        }
    }
}

impl Drop for BatchContext {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for BatchContext {}

impl core::fmt::Debug for BatchContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BatchContext")
            .field("valid", &self.is_valid())
            .finish_non_exhaustive()
    }
}

#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
unsafe fn clear_wide_registers() {
    _mm256_zeroall();
}

// =============================================================================
// TESTS
// =============================================================================
