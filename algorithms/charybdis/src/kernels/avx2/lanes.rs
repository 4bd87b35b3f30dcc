//! Eight 32-bit lanes in one YMM register.

#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::inline_always)]

use crate::kernels::word::{Matrix, Word};
use zeroize::Zeroize;

#[cfg(target_arch = "x86")]
use core::arch::x86::{
    __m256i, _mm256_add_epi32, _mm256_or_si256, _mm256_set1_epi32, _mm256_sll_epi32,
    _mm256_srl_epi32, _mm256_sub_epi32, _mm256_xor_si256, _mm_cvtsi32_si128,
};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{
    __m256i, _mm256_add_epi32, _mm256_or_si256, _mm256_set1_epi32, _mm256_sll_epi32,
    _mm256_srl_epi32, _mm256_sub_epi32, _mm256_xor_si256, _mm_cvtsi32_si128,
};

// =============================================================================
// LANES
// =============================================================================

/// One state word for 8 blocks; lane `b` belongs to block `b` of the group.
///
/// Invariant: a `Lanes` is only ever created by code that runs with AVX2
/// enabled (`splat` and the transpose network are `target_feature` functions).
/// Holding one therefore proves the CPU supports the [`Word`] operations below.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Lanes(__m256i);

impl Lanes {
    /// Broadcast `x` into all 8 lanes.
    ///
    /// # Safety
    /// The CPU must support AVX2.
    #[inline]
    #[target_feature(enable = "avx2")]
    #[allow(unsafe_code)]
    pub unsafe fn splat(x: u32) -> Self {
        Self(_mm256_set1_epi32(x as i32))
    }

    #[inline(always)]
    pub(super) const fn from_raw(v: __m256i) -> Self {
        Self(v)
    }

    #[inline(always)]
    pub(super) const fn raw(self) -> __m256i {
        self.0
    }
}

/// Broadcast every word of a scalar matrix.
///
/// # Safety
/// The CPU must support AVX2.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
pub unsafe fn splat_matrix(m: &Matrix<u32>) -> Matrix<Lanes> {
    m.map(|row| row.map(|w| Lanes::splat(w)))
}

// SAFETY (all methods): see the type-level invariant. The intrinsics are
// register-only and have no memory or alignment requirements.
#[allow(unsafe_code)]
impl Word for Lanes {
    #[inline(always)]
    fn add_mod(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_add_epi32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub_mod(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_sub_epi32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_xor_si256(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn rotr(self, n: u32) -> Self {
        unsafe {
            let right = _mm256_srl_epi32(self.0, _mm_cvtsi32_si128(n as i32));
            let left = _mm256_sll_epi32(self.0, _mm_cvtsi32_si128((32 - n) as i32));
            Self(_mm256_or_si256(right, left))
        }
    }

    #[inline(always)]
    fn rotl(self, n: u32) -> Self {
        self.rotr(32 - n)
    }
}

impl Zeroize for Lanes {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
