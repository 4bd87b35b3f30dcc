//! Word Abstraction
//!
//! The round layer is written once over [`Word`] and instantiated for a
//! scalar `u32` and for the 8-lane AVX2 register. Both engines therefore run
//! the exact same layer sequence.

#![allow(clippy::inline_always)]

// =============================================================================
// TYPES
// =============================================================================

/// 4x4 cipher state, indexed `[row][column]`.
pub type Matrix<W> = [[W; 4]; 4];

/// Apply `f` to column `col` of a 4-row matrix, writing the result back.
#[inline(always)]
pub fn map_column<W: Copy, const N: usize>(
    rows: &mut [[W; N]; 4],
    col: usize,
    f: impl Fn([W; 4]) -> [W; 4],
) {
    let mixed = f(core::array::from_fn(|row| rows[row][col]));
    for (row, word) in rows.iter_mut().zip(mixed) {
        row[col] = word;
    }
}

/// A 32-bit word, or a vector of independent 32-bit lanes.
///
/// All arithmetic is modulo 2^32 per lane. Rotation amounts are always in
/// `1..32`.
pub trait Word: Copy {
    /// Addition modulo 2^32.
    #[must_use]
    fn add_mod(self, rhs: Self) -> Self;

    /// Subtraction modulo 2^32.
    #[must_use]
    fn sub_mod(self, rhs: Self) -> Self;

    /// Bitwise exclusive or.
    #[must_use]
    fn xor(self, rhs: Self) -> Self;

    /// Rotate right by `n` bits.
    #[must_use]
    fn rotr(self, n: u32) -> Self;

    /// Rotate left by `n` bits.
    #[must_use]
    fn rotl(self, n: u32) -> Self;
}

// =============================================================================
// SCALAR
// =============================================================================

impl Word for u32 {
    #[inline(always)]
    fn add_mod(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    #[inline(always)]
    fn sub_mod(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        self ^ rhs
    }

    #[inline(always)]
    fn rotr(self, n: u32) -> Self {
        self.rotate_right(n)
    }

    #[inline(always)]
    fn rotl(self, n: u32) -> Self {
        self.rotate_left(n)
    }
}
