//! AoS <-> SoA Transpose Network
//!
//! A group is 8 blocks of 16 words. Each block occupies two YMM rows (words
//! 0..8 and 8..16), so the group is two 8x8 word matrices. Transposing each
//! one yields a register per state cell with lane `b` holding block `b`.
//!
//! ```text
//! interleave_words    unpack{lo,hi}_epi32   rows (0,1) (2,3) (4,5) (6,7)
//! interleave_dwords   unpack{lo,hi}_epi64   pairs (t0,t2) (t1,t3) ...
//! interleave_lanes    permute2x128 0x20/0x31 pairs (u0,u4) (u1,u5) ...
//! ```
//!
//! The full network is an involution, so load and store share it.

use super::lanes::Lanes;
use crate::kernels::constants::BATCH_LANES;
use crate::kernels::word::Matrix;
use crate::types::Block;

#[cfg(target_arch = "x86")]
use core::arch::x86::{
    __m256i, _mm256_loadu_si256, _mm256_permute2x128_si256, _mm256_setr_epi8,
    _mm256_shuffle_epi8, _mm256_storeu_si256, _mm256_unpackhi_epi32, _mm256_unpackhi_epi64,
    _mm256_unpacklo_epi32, _mm256_unpacklo_epi64,
};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{
    __m256i, _mm256_loadu_si256, _mm256_permute2x128_si256, _mm256_setr_epi8,
    _mm256_shuffle_epi8, _mm256_storeu_si256, _mm256_unpackhi_epi32, _mm256_unpackhi_epi64,
    _mm256_unpacklo_epi32, _mm256_unpacklo_epi64,
};

/// Eight 256-bit rows.
pub type Rows = [__m256i; 8];

// =============================================================================
// STAGES
// =============================================================================

/// Stage 1: interleave 32-bit words of adjacent rows.
///
/// # Safety
/// The CPU must support AVX2.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
pub unsafe fn interleave_words(r: Rows) -> Rows {
    [
        _mm256_unpacklo_epi32(r[0], r[1]),
        _mm256_unpackhi_epi32(r[0], r[1]),
        _mm256_unpacklo_epi32(r[2], r[3]),
        _mm256_unpackhi_epi32(r[2], r[3]),
        _mm256_unpacklo_epi32(r[4], r[5]),
        _mm256_unpackhi_epi32(r[4], r[5]),
        _mm256_unpacklo_epi32(r[6], r[7]),
        _mm256_unpackhi_epi32(r[6], r[7]),
    ]
}

/// Stage 2: interleave 64-bit pairs produced by stage 1.
///
/// # Safety
/// The CPU must support AVX2.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
pub unsafe fn interleave_dwords(t: Rows) -> Rows {
    [
        _mm256_unpacklo_epi64(t[0], t[2]),
        _mm256_unpackhi_epi64(t[0], t[2]),
        _mm256_unpacklo_epi64(t[1], t[3]),
        _mm256_unpackhi_epi64(t[1], t[3]),
        _mm256_unpacklo_epi64(t[4], t[6]),
        _mm256_unpackhi_epi64(t[4], t[6]),
        _mm256_unpacklo_epi64(t[5], t[7]),
        _mm256_unpackhi_epi64(t[5], t[7]),
    ]
}

/// Stage 3: join 128-bit halves of rows 0..4 with those of rows 4..8.
///
/// # Safety
/// The CPU must support AVX2.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
pub unsafe fn interleave_lanes(u: Rows) -> Rows {
    [
        _mm256_permute2x128_si256::<0x20>(u[0], u[4]),
        _mm256_permute2x128_si256::<0x20>(u[1], u[5]),
        _mm256_permute2x128_si256::<0x20>(u[2], u[6]),
        _mm256_permute2x128_si256::<0x20>(u[3], u[7]),
        _mm256_permute2x128_si256::<0x31>(u[0], u[4]),
        _mm256_permute2x128_si256::<0x31>(u[1], u[5]),
        _mm256_permute2x128_si256::<0x31>(u[2], u[6]),
        _mm256_permute2x128_si256::<0x31>(u[3], u[7]),
    ]
}

/// 8x8 transpose of 32-bit words.
///
/// # Safety
/// The CPU must support AVX2.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
pub unsafe fn transpose8(rows: Rows) -> Rows {
    interleave_lanes(interleave_dwords(interleave_words(rows)))
}

// =============================================================================
// BYTE ORDER
// =============================================================================

/// Reverse the bytes of every 32-bit word (big-endian <-> native).
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
unsafe fn bswap32(v: __m256i) -> __m256i {
    let mask = _mm256_setr_epi8(
        3, 2, 1, 0, 7, 6, 5, 4, 11, 10, 9, 8, 15, 14, 13, 12, //
        3, 2, 1, 0, 7, 6, 5, 4, 11, 10, 9, 8, 15, 14, 13, 12,
    );
    _mm256_shuffle_epi8(v, mask)
}

// =============================================================================
// LOAD / STORE
// =============================================================================

/// Load 8 blocks into lane layout. Cell `[i][j]` holds word `4i + j` of
/// every block.
///
/// # Safety
/// The CPU must support AVX2.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
#[allow(clippy::cast_ptr_alignment)]
pub unsafe fn load_group(group: &[Block; BATCH_LANES]) -> Matrix<Lanes> {
    let row = |b: usize, half: usize| {
        // SAFETY: each block is 64 bytes, so both 32-byte halves are in bounds;
        // `loadu` has no alignment requirement.
        unsafe { bswap32(_mm256_loadu_si256(group[b].as_ptr().cast::<__m256i>().add(half))) }
    };
    let low = transpose8(core::array::from_fn(|b| row(b, 0)));
    let high = transpose8(core::array::from_fn(|b| row(b, 1)));

    let cell = |w: usize| Lanes::from_raw(if w < 8 { low[w] } else { high[w - 8] });
    core::array::from_fn(|i| core::array::from_fn(|j| cell(4 * i + j)))
}

/// Inverse of [`load_group`].
///
/// # Safety
/// The CPU must support AVX2.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
#[allow(clippy::cast_ptr_alignment)]
pub unsafe fn store_group(state: &Matrix<Lanes>, group: &mut [Block; BATCH_LANES]) {
    let [r0, r1, r2, r3] = state;
    let low = transpose8([
        r0[0].raw(),
        r0[1].raw(),
        r0[2].raw(),
        r0[3].raw(),
        r1[0].raw(),
        r1[1].raw(),
        r1[2].raw(),
        r1[3].raw(),
    ]);
    let high = transpose8([
        r2[0].raw(),
        r2[1].raw(),
        r2[2].raw(),
        r2[3].raw(),
        r3[0].raw(),
        r3[1].raw(),
        r3[2].raw(),
        r3[3].raw(),
    ]);
    for (b, block) in group.iter_mut().enumerate() {
        // SAFETY: as in `load_group`; `storeu` has no alignment requirement.
        let ptr = block.as_mut_ptr().cast::<__m256i>();
        _mm256_storeu_si256(ptr, bswap32(low[b]));
        _mm256_storeu_si256(ptr.add(1), bswap32(high[b]));
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(unsafe_code, clippy::cast_possible_truncation, clippy::needless_range_loop)]
mod tests {
    use super::*;
    use crate::kernels::portable::load_state;

    fn avx2() -> bool {
        if crate::engine::dispatcher::avx2_available() {
            true
        } else {
            println!("Skipping: AVX2 not supported on this CPU");
            false
        }
    }

    fn numbered_group() -> [Block; BATCH_LANES] {
        let mut group = [[0u8; 64]; BATCH_LANES];
        for (b, block) in group.iter_mut().enumerate() {
            for (i, byte) in block.iter_mut().enumerate() {
                *byte = (b * 64 + i) as u8 ^ (b as u8).rotate_left(5);
            }
        }
        group
    }

    fn to_words(r: __m256i) -> [u32; 8] {
        // SAFETY: `__m256i` and `[u32; 8]` have identical size and no invalid bit patterns.
        unsafe { core::mem::transmute::<__m256i, [u32; 8]>(r) }
    }

    fn from_words(w: [u32; 8]) -> __m256i {
        // SAFETY: as above.
        unsafe { core::mem::transmute::<[u32; 8], __m256i>(w) }
    }

    #[test]
    fn test_transpose_moves_every_word() {
        if !avx2() {
            return;
        }
        let rows: Rows =
            core::array::from_fn(|i| from_words(core::array::from_fn(|j| (i * 8 + j) as u32)));
        // SAFETY: AVX2 checked above.
        let out = unsafe { transpose8(rows) };
        for (j, col) in out.iter().enumerate() {
            let expected: [u32; 8] = core::array::from_fn(|i| (i * 8 + j) as u32);
            assert_eq!(to_words(*col), expected, "column {j}");
        }
        // SAFETY: AVX2 checked above.
        let back = unsafe { transpose8(out) };
        for (a, b) in back.iter().zip(&rows) {
            assert_eq!(to_words(*a), to_words(*b));
        }
    }

    #[test]
    fn test_stages_are_not_individually_identity() {
        if !avx2() {
            return;
        }
        let rows: Rows =
            core::array::from_fn(|i| from_words(core::array::from_fn(|j| (i * 8 + j) as u32)));
        // SAFETY: AVX2 checked above.
        let (s1, s2) = unsafe {
            let s1 = interleave_words(rows);
            (s1, interleave_dwords(s1))
        };
        assert_eq!(to_words(s1[0]), [0, 8, 1, 9, 4, 12, 5, 13]);
        assert_eq!(to_words(s2[0]), [0, 8, 16, 24, 4, 12, 20, 28]);
    }

    #[test]
    fn test_load_matches_scalar_layout() {
        if !avx2() {
            return;
        }
        let group = numbered_group();
        // SAFETY: AVX2 checked above.
        let lanes = unsafe { load_group(&group) };
        for (b, block) in group.iter().enumerate() {
            let scalar = load_state(block);
            for i in 0..4 {
                for j in 0..4 {
                    assert_eq!(to_words(lanes[i][j].raw())[b], scalar[i][j], "block {b} [{i}][{j}]");
                }
            }
        }
    }

    #[test]
    fn test_load_store_identity() {
        if !avx2() {
            return;
        }
        let group = numbered_group();
        let mut out = [[0u8; 64]; BATCH_LANES];
        // SAFETY: AVX2 checked above.
        unsafe {
            let lanes = load_group(&group);
            store_group(&lanes, &mut out);
        }
        assert_eq!(out, group);
    }
}
