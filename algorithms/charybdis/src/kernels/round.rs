//! Round Layer
//!
//! `SubConstants -> ColumnMix -> ShiftRows -> AddRoundKey`, generic over
//! [`Word`] so the scalar and AVX2 engines share one definition.

#![allow(clippy::inline_always)]

use super::arx::{inverse_mix_g, inverse_mix_h, mix_g, mix_h};
use super::constants::{NUM_SUBKEYS, ROUNDS};
use super::word::{map_column, Matrix, Word};

// =============================================================================
// XOR LAYERS (INVOLUTIONS)
// =============================================================================

#[inline(always)]
fn xor_matrix<W: Word>(state: &mut Matrix<W>, other: &Matrix<W>) {
    for (row, other_row) in state.iter_mut().zip(other) {
        for (cell, &k) in row.iter_mut().zip(other_row) {
            *cell = cell.xor(k);
        }
    }
}

/// XOR the round constants of one round into the state. Self-inverse.
#[inline(always)]
pub fn sub_constants<W: Word>(state: &mut Matrix<W>, round_constants: &Matrix<W>) {
    xor_matrix(state, round_constants);
}

/// XOR a subkey into the state. Self-inverse.
#[inline(always)]
pub fn add_round_key<W: Word>(state: &mut Matrix<W>, subkey: &Matrix<W>) {
    xor_matrix(state, subkey);
}

// =============================================================================
// COLUMN MIX
// =============================================================================

#[inline(always)]
const fn swap_halves<W: Copy>([a, b, c, d]: [W; 4]) -> [W; 4] {
    [c, d, a, b]
}

/// G, H on `(0, 1, 2, 3)`, then H, G on `(2, 3, 0, 1)`.
#[inline(always)]
fn mix_column<W: Word>(column: [W; 4]) -> [W; 4] {
    let column = mix_h(mix_g(column));
    swap_halves(mix_g(mix_h(swap_halves(column))))
}

#[inline(always)]
fn unmix_column<W: Word>(column: [W; 4]) -> [W; 4] {
    let column = swap_halves(inverse_mix_h(inverse_mix_g(swap_halves(column))));
    inverse_mix_g(inverse_mix_h(column))
}

#[inline(always)]
fn map_columns<W: Word>(state: &mut Matrix<W>, f: impl Fn([W; 4]) -> [W; 4]) {
    for col in 0..4 {
        map_column(state, col, &f);
    }
}

/// Apply the column transform to all four columns independently.
#[inline(always)]
pub fn column_mix<W: Word>(state: &mut Matrix<W>) {
    map_columns(state, mix_column);
}

/// Inverse of [`column_mix`].
#[inline(always)]
pub fn inverse_column_mix<W: Word>(state: &mut Matrix<W>) {
    map_columns(state, unmix_column);
}

// =============================================================================
// SHIFT ROWS
// =============================================================================

/// Rotate row `i` left by `i` positions.
#[inline(always)]
pub fn shift_rows<W: Copy>(state: &mut Matrix<W>) {
    for (i, row) in state.iter_mut().enumerate() {
        row.rotate_left(i);
    }
}

/// Rotate row `i` right by `i` positions.
#[inline(always)]
pub fn inverse_shift_rows<W: Copy>(state: &mut Matrix<W>) {
    for (i, row) in state.iter_mut().enumerate() {
        row.rotate_right(i);
    }
}

// =============================================================================
// ROUNDS
// =============================================================================

/// One forward round.
#[inline(always)]
pub fn round<W: Word>(state: &mut Matrix<W>, round_constants: &Matrix<W>, subkey: &Matrix<W>) {
    sub_constants(state, round_constants);
    column_mix(state);
    shift_rows(state);
    add_round_key(state, subkey);
}

/// One inverse round, layers undone in reverse order.
#[inline(always)]
pub fn inverse_round<W: Word>(
    state: &mut Matrix<W>,
    round_constants: &Matrix<W>,
    subkey: &Matrix<W>,
) {
    add_round_key(state, subkey);
    inverse_shift_rows(state);
    inverse_column_mix(state);
    sub_constants(state, round_constants);
}

/// Whitening with `K[0]`, rounds `1..=22`, whitening with `K[23]`.
///
/// `round_constants[r - 1]` belongs to round `r`.
#[inline(always)]
pub fn encrypt_state<W: Word>(
    state: &mut Matrix<W>,
    subkeys: &[Matrix<W>; NUM_SUBKEYS],
    round_constants: &[Matrix<W>; ROUNDS],
) {
    add_round_key(state, &subkeys[0]);
    for (rc, k) in round_constants.iter().zip(&subkeys[1..=ROUNDS]) {
        round(state, rc, k);
    }
    add_round_key(state, &subkeys[ROUNDS + 1]);
}

/// Mirror of [`encrypt_state`]: `K[23]`, rounds `22..=1`, `K[0]`.
#[inline(always)]
pub fn decrypt_state<W: Word>(
    state: &mut Matrix<W>,
    subkeys: &[Matrix<W>; NUM_SUBKEYS],
    round_constants: &[Matrix<W>; ROUNDS],
) {
    add_round_key(state, &subkeys[ROUNDS + 1]);
    for (rc, k) in round_constants.iter().zip(&subkeys[1..=ROUNDS]).rev() {
        inverse_round(state, rc, k);
    }
    add_round_key(state, &subkeys[0]);
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::needless_range_loop)]
mod tests {
    use super::*;
    use crate::kernels::constants::ROUND_CONSTANT_MATRICES;
    use rand::prelude::*;

    fn random_state(rng: &mut StdRng) -> Matrix<u32> {
        rng.random()
    }

    #[test]
    fn test_shift_rows_offsets() {
        let mut s = [[0, 1, 2, 3], [4, 5, 6, 7], [8, 9, 10, 11], [12, 13, 14, 15]];
        shift_rows(&mut s);
        assert_eq!(
            s,
            [[0, 1, 2, 3], [5, 6, 7, 4], [10, 11, 8, 9], [15, 12, 13, 14]]
        );
        inverse_shift_rows(&mut s);
        assert_eq!(s, [[0, 1, 2, 3], [4, 5, 6, 7], [8, 9, 10, 11], [12, 13, 14, 15]]);
    }

    #[test]
    fn test_xor_layers_are_involutions() {
        let mut rng = StdRng::seed_from_u64(1);
        let original = random_state(&mut rng);
        let key = random_state(&mut rng);
        let mut s = original;
        sub_constants(&mut s, &ROUND_CONSTANT_MATRICES[7]);
        assert_ne!(s, original);
        sub_constants(&mut s, &ROUND_CONSTANT_MATRICES[7]);
        assert_eq!(s, original);

        add_round_key(&mut s, &key);
        add_round_key(&mut s, &key);
        assert_eq!(s, original);
    }

    #[test]
    fn test_column_mix_round_trip() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            let original = random_state(&mut rng);
            let mut s = original;
            column_mix(&mut s);
            assert_ne!(s, original);
            inverse_column_mix(&mut s);
            assert_eq!(s, original);
        }
    }

    #[test]
    fn test_column_mix_is_column_local() {
        let original = random_state(&mut StdRng::seed_from_u64(42));
        let mut flipped = original;
        flipped[2][1] ^= 1;

        let mut a = original;
        let mut b = flipped;
        column_mix(&mut a);
        column_mix(&mut b);

        for j in [0, 2, 3] {
            for i in 0..4 {
                assert_eq!(a[i][j], b[i][j]);
            }
        }
        assert!((0..4).any(|i| a[i][1] != b[i][1]));
    }

    #[test]
    fn test_round_inverse() {
        let mut rng = StdRng::seed_from_u64(99);
        let key = random_state(&mut rng);
        for (r, rc) in ROUND_CONSTANT_MATRICES.iter().enumerate() {
            let original = random_state(&mut rng);
            let mut s = original;
            round(&mut s, rc, &key);
            inverse_round(&mut s, rc, &key);
            assert_eq!(s, original, "round {}", r + 1);
        }
    }

    #[test]
    fn test_state_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        let subkeys: [Matrix<u32>; NUM_SUBKEYS] = core::array::from_fn(|_| random_state(&mut rng));
        let original = random_state(&mut rng);
        let mut s = original;
        encrypt_state(&mut s, &subkeys, &ROUND_CONSTANT_MATRICES);
        assert_ne!(s, original);
        decrypt_state(&mut s, &subkeys, &ROUND_CONSTANT_MATRICES);
        assert_eq!(s, original);
    }
}
