//! ARX Mixing Core
//!
//! One 4-word add-rotate-xor permutation, parameterised by four right-rotation
//! amounts. `MixG` and `MixH` build the cipher's column transform; `MixF` drives
//! the key-schedule permutation.

#![allow(clippy::inline_always)]

use super::constants::{ROT_F, ROT_G, ROT_H};
use super::word::Word;

// =============================================================================
// GENERIC CORE
// =============================================================================

/// Forward quarter-round on `(a, b, c, d)`.
#[inline(always)]
pub fn mix<W: Word>([mut a, mut b, mut c, mut d]: [W; 4], rot: &[u32; 4]) -> [W; 4] {
    a = a.add_mod(b);
    d = d.xor(a).rotr(rot[0]);
    c = c.add_mod(d);
    b = b.xor(c).rotr(rot[1]);
    a = a.add_mod(b);
    d = d.xor(a).rotr(rot[2]);
    c = c.add_mod(d);
    b = b.xor(c).rotr(rot[3]);
    [a, b, c, d]
}

/// Exact inverse of [`mix`] for the same rotation amounts.
#[inline(always)]
pub fn unmix<W: Word>([mut a, mut b, mut c, mut d]: [W; 4], rot: &[u32; 4]) -> [W; 4] {
    b = b.rotl(rot[3]).xor(c);
    c = c.sub_mod(d);
    d = d.rotl(rot[2]).xor(a);
    a = a.sub_mod(b);
    b = b.rotl(rot[1]).xor(c);
    c = c.sub_mod(d);
    d = d.rotl(rot[0]).xor(a);
    a = a.sub_mod(b);
    [a, b, c, d]
}

// =============================================================================
// NAMED VARIANTS
// =============================================================================

/// `MixG`: rotations (13, 19, 23, 29).
#[inline(always)]
pub fn mix_g<W: Word>(v: [W; 4]) -> [W; 4] {
    mix(v, &ROT_G)
}

/// Inverse of [`mix_g`].
#[inline(always)]
pub fn inverse_mix_g<W: Word>(v: [W; 4]) -> [W; 4] {
    unmix(v, &ROT_G)
}

/// `MixH`: rotations (9, 17, 21, 27).
#[inline(always)]
pub fn mix_h<W: Word>(v: [W; 4]) -> [W; 4] {
    mix(v, &ROT_H)
}

/// Inverse of [`mix_h`].
#[inline(always)]
pub fn inverse_mix_h<W: Word>(v: [W; 4]) -> [W; 4] {
    unmix(v, &ROT_H)
}

/// `MixF`: rotations (11, 19, 23, 29).
#[inline(always)]
pub fn mix_f<W: Word>(v: [W; 4]) -> [W; 4] {
    mix(v, &ROT_F)
}

/// Inverse of [`mix_f`]. The key schedule never runs backwards.
#[inline(always)]
pub fn inverse_mix_f<W: Word>(v: [W; 4]) -> [W; 4] {
    unmix(v, &ROT_F)
}

// =============================================================================
// TESTS
// =============================================================================
