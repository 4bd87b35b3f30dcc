//! Portable implementation of Charybdis.
//!
//! One block at a time on plain `u32` words. This is the reference path: the
//! AVX2 engine must match it bit for bit, and it also handles the batch tail.

use crate::kernels::constants::{BLOCK_SIZE, ROUND_CONSTANT_MATRICES};
use crate::kernels::round::{add_round_key, decrypt_state, encrypt_state, round};
use crate::kernels::word::Matrix;
use crate::types::{Block, Subkeys};

// =============================================================================
// BYTE ORDER
// =============================================================================

/// Load a block row-major, 4 big-endian bytes per word.
#[inline]
#[must_use]
pub fn load_state(block: &[u8; BLOCK_SIZE]) -> Matrix<u32> {
    let mut state = [[0u32; 4]; 4];
    let (words, _) = block.as_chunks::<4>();
    for (cell, bytes) in state.as_flattened_mut().iter_mut().zip(words) {
        *cell = u32::from_be_bytes(*bytes);
    }
    state
}

/// Inverse of [`load_state`].
#[inline]
pub fn store_state(state: &Matrix<u32>, block: &mut [u8; BLOCK_SIZE]) {
    let (words, _) = block.as_chunks_mut::<4>();
    for (bytes, cell) in words.iter_mut().zip(state.as_flattened()) {
        *bytes = cell.to_be_bytes();
    }
}

// =============================================================================
// SINGLE BLOCK
// =============================================================================

/// Encrypt one block in place.
#[inline]
pub fn encrypt_block(block: &mut Block, subkeys: &Subkeys) {
    let mut state = load_state(block);
    encrypt_state(&mut state, subkeys.matrices(), &ROUND_CONSTANT_MATRICES);
    store_state(&state, block);
}

/// Decrypt one block in place.
#[inline]
pub fn decrypt_block(block: &mut Block, subkeys: &Subkeys) {
    let mut state = load_state(block);
    decrypt_state(&mut state, subkeys.matrices(), &ROUND_CONSTANT_MATRICES);
    store_state(&state, block);
}

/// Encrypt `input` into `output`.
#[inline]
pub fn encrypt_block_b2b(input: &Block, output: &mut Block, subkeys: &Subkeys) {
    let mut state = load_state(input);
    encrypt_state(&mut state, subkeys.matrices(), &ROUND_CONSTANT_MATRICES);
    store_state(&state, output);
}

/// Decrypt `input` into `output`.
#[inline]
pub fn decrypt_block_b2b(input: &Block, output: &mut Block, subkeys: &Subkeys) {
    let mut state = load_state(input);
    decrypt_state(&mut state, subkeys.matrices(), &ROUND_CONSTANT_MATRICES);
    store_state(&state, output);
}

/// State after whitening and round 1 only. Exposed for the published
/// intermediate test values.
#[must_use]
pub fn first_round_state(block: &Block, subkeys: &Subkeys) -> Block {
    let keys = subkeys.matrices();
    let mut state = load_state(block);
    add_round_key(&mut state, &keys[0]);
    round(&mut state, &ROUND_CONSTANT_MATRICES[0], &keys[1]);
    let mut out = [0u8; BLOCK_SIZE];
    store_state(&state, &mut out);
    out
}

// =============================================================================
// MULTI BLOCK
// =============================================================================

/// Encrypt consecutive blocks in place.
pub fn encrypt_blocks(blocks: &mut [Block], subkeys: &Subkeys) {
    for block in blocks {
        encrypt_block(block, subkeys);
    }
}

/// Decrypt consecutive blocks in place.
pub fn decrypt_blocks(blocks: &mut [Block], subkeys: &Subkeys) {
    for block in blocks {
        decrypt_block(block, subkeys);
    }
}

// =============================================================================
// TESTS
// =============================================================================
