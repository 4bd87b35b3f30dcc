//! Key Schedule (Sponge)
//!
//! A 4x8 word state. Columns 0..4 are the rate and are squeezed out as
//! subkeys; columns 4..8 are the capacity. The state never leaves this module
//! and is wiped on drop.
//!
//! ```text
//! init     row 0 = key (8 BE words), rows 1..4 = KS_INIT
//! absorb   F_perm
//! squeeze  K[i] = rate                                   i = 0..24
//!          i < 23: counter(i + 1) -> [mask_i] -> F_perm
//! ```

use super::arx::mix_f;
use super::constants::{
    KEY_SIZE, KS_COUNTER_CELLS, KS_DOMAIN_CONSTANTS, KS_INIT, KS_ROUNDS, KS_ROUND_CONSTANTS,
    KS_STATE_WORDS,
};
use super::word::{map_column, Matrix};
use crate::types::{Key, KeyScheduleVariant, Subkeys};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// 1024-bit sponge state, `[row][column]`.
pub type SpongeState = [[u32; 8]; 4];

// =============================================================================
// PERMUTATION
// =============================================================================

/// `F_perm`: 16 rounds of diagonal constants, column `MixF`, row-window `MixF`.
pub fn permute(state: &mut SpongeState) {
    let (round_constants, _) = KS_ROUND_CONSTANTS.as_chunks::<4>();
    debug_assert_eq!(round_constants.len(), KS_ROUNDS);

    for rc in round_constants {
        for (i, &c) in rc.iter().enumerate() {
            state[i][i] = state[i][i].wrapping_add(c);
        }

        for col in 0..8 {
            map_column(state, col, mix_f);
        }

        for (i, row) in state.iter_mut().enumerate() {
            for base in [i, i + 4] {
                let idx = [base % 8, (base + 1) % 8, (base + 2) % 8, (base + 3) % 8];
                let out = mix_f(idx.map(|j| row[j]));
                for (j, v) in idx.into_iter().zip(out) {
                    row[j] = v;
                }
            }
        }
    }
}

// =============================================================================
// SPONGE
// =============================================================================

#[derive(Zeroize, ZeroizeOnDrop)]
struct Sponge {
    state: SpongeState,
}

impl Sponge {
    fn absorb(key: &Key) -> Self {
        let mut state = [[0u32; 8]; 4];
        let (key_words, _) = key.as_chunks::<4>();
        debug_assert_eq!(key_words.len(), KEY_SIZE / 4);
        for (cell, bytes) in state[0].iter_mut().zip(key_words) {
            *cell = u32::from_be_bytes(*bytes);
        }
        for (cell, &c) in state[1..].as_flattened_mut().iter_mut().zip(&KS_INIT) {
            *cell = c;
        }

        let mut sponge = Self { state };
        state.zeroize();
        permute(&mut sponge.state);
        sponge
    }

    fn squeeze_into(&self, out: &mut Matrix<u32>) {
        for (dst, src) in out.iter_mut().zip(&self.state) {
            dst.copy_from_slice(&src[..4]);
        }
    }

    fn inject_counter(&mut self, counter: u32) {
        for (row, col) in KS_COUNTER_CELLS {
            self.state[row][col] = self.state[row][col].wrapping_add(counter);
        }
    }

    fn xor_mask(&mut self, mask: &[u32; KS_STATE_WORDS]) {
        for (cell, &m) in self.state.as_flattened_mut().iter_mut().zip(mask) {
            *cell ^= m;
        }
    }
}

// =============================================================================
// EXPANSION
// =============================================================================

/// Expand a 256-bit key into 24 subkeys.
#[must_use]
pub fn expand(key: &Key, variant: KeyScheduleVariant) -> Subkeys {
    let (masks, _) = KS_DOMAIN_CONSTANTS.as_chunks::<KS_STATE_WORDS>();
    let mut sponge = Sponge::absorb(key);
    let mut subkeys = Subkeys::zeroed();

    if let Some((last, head)) = subkeys.matrices_mut().split_last_mut() {
        for ((slot, mask), counter) in head.iter_mut().zip(masks).zip(1u32..) {
            sponge.squeeze_into(slot);
            sponge.inject_counter(counter);
            if variant == KeyScheduleVariant::Hardened {
                sponge.xor_mask(mask);
            }
            permute(&mut sponge.state);
        }
        sponge.squeeze_into(last);
    }

    tracing::trace!(?variant, "key schedule expanded");
    subkeys
}

// =============================================================================
// TESTS
// =============================================================================
