//! Security Property Tests
//!
//! Round-trip correctness on random inputs, diffusion of single-bit changes
//! in key and plaintext, and schedule variant separation.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::unwrap_used)]

use charybdis::{Block, Charybdis, Key, KeyScheduleVariant};
use rand::prelude::*;

fn bit_distance(a: &Block, b: &Block) -> u32 {
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

fn encrypt(key: &Key, pt: &Block) -> Block {
    let mut block = *pt;
    Charybdis::new(key).encrypt_block(&mut block);
    block
}

// =============================================================================
// ROUND TRIP
// =============================================================================

#[test]
fn test_random_round_trips() {
    let mut rng = rand::rng();
    for i in 0..10_000 {
        let mut key = [0u8; 32];
        let mut pt = [0u8; 64];
        rng.fill(&mut key[..]);
        rng.fill(&mut pt[..]);

        let subkeys = charybdis::key_schedule(&key);
        let mut block = pt;
        charybdis::encrypt_block(&mut block, &subkeys);
        assert_ne!(block, pt, "iteration {i}: encryption was the identity");
        charybdis::decrypt_block(&mut block, &subkeys);
        assert_eq!(block, pt, "iteration {i}: round trip failed");
    }
}

#[test]
fn test_edge_inputs_round_trip() {
    for key in [[0u8; 32], [0xFF; 32]] {
        let cipher = Charybdis::new(&key);
        for pt in [[0u8; 64], [0xFF; 64], [0x80; 64]] {
            let mut block = pt;
            cipher.encrypt_block(&mut block);
            cipher.decrypt_block(&mut block);
            assert_eq!(block, pt);
        }
    }
}

// =============================================================================
// AVALANCHE
// =============================================================================

#[test]
fn test_plaintext_avalanche() {
    // Single bit flip should change ~50% of 512 output bits
    let key = [0x24u8; 32];
    let pt = [0x11u8; 64];
    let base = encrypt(&key, &pt);

    let mut total = 0u32;
    for bit in 0..512 {
        let mut flipped = pt;
        flipped[bit / 8] ^= 1 << (bit % 8);
        let d = bit_distance(&base, &encrypt(&key, &flipped));
        assert!(d > 180 && d < 332, "plaintext bit {bit}: only {d} of 512 bits differ");
        total += d;
    }
    let mean = total as f64 / 512.0;
    assert!((mean - 256.0).abs() < 8.0, "mean distance {mean}");
}

#[test]
fn test_key_avalanche() {
    let key = [0x5Cu8; 32];
    let pt = [0u8; 64];
    let base = encrypt(&key, &pt);

    for bit in 0..256 {
        let mut flipped = key;
        flipped[bit / 8] ^= 1 << (bit % 8);
        let d = bit_distance(&base, &encrypt(&flipped, &pt));
        assert!(d > 180 && d < 332, "key bit {bit}: only {d} of 512 bits differ");
    }
}

#[test]
fn test_key_schedule_avalanche() {
    // Every single-bit key change must change every subkey.
    let key = [0xC7u8; 32];
    let base = charybdis::key_schedule(&key);
    let mut distances = Vec::new();

    for bit in 0..256 {
        let mut flipped = key;
        flipped[bit / 8] ^= 1 << (bit % 8);
        let other = charybdis::key_schedule(&flipped);
        for i in 0..charybdis::NUM_SUBKEYS {
            let (a, b) = (base.subkey_bytes(i).unwrap(), other.subkey_bytes(i).unwrap());
            let d = bit_distance(&a, &b);
            assert!(d > 0, "key bit {bit} left K[{i}] unchanged");
            distances.push(d);
        }
    }
    let mean = distances.iter().sum::<u32>() as f64 / distances.len() as f64;
    assert!((mean - 256.0).abs() < 4.0, "mean subkey distance {mean}");
    assert!(distances.iter().all(|&d| d > 180 && d < 332));
}

// =============================================================================
// SCHEDULE
// =============================================================================

#[test]
fn test_determinism() {
    let key = [0x42u8; 32];
    let a = charybdis::key_schedule(&key);
    let b = charybdis::key_schedule(&key);
    for i in 0..charybdis::NUM_SUBKEYS {
        assert_eq!(a.subkey_bytes(i), b.subkey_bytes(i));
    }
    assert_eq!(encrypt(&key, &[3u8; 64]), encrypt(&key, &[3u8; 64]));
}

#[test]
fn test_schedule_variants_differ() {
    let key = [0x42u8; 32];
    let hardened = charybdis::key_schedule_with(&key, KeyScheduleVariant::Hardened);
    let legacy = charybdis::key_schedule_with(&key, KeyScheduleVariant::Legacy);
    // K[0] is squeezed before any domain separation step.
    assert_eq!(hardened.subkey_bytes(0), legacy.subkey_bytes(0));
    for i in 1..charybdis::NUM_SUBKEYS {
        assert_ne!(hardened.subkey_bytes(i), legacy.subkey_bytes(i), "K[{i}]");
    }
    assert_eq!(KeyScheduleVariant::default(), KeyScheduleVariant::Hardened);
}

#[test]
fn test_subkeys_serialization() {
    let subkeys = charybdis::key_schedule(&[0x99u8; 32]);
    let mut bytes = [0u8; charybdis::SUBKEYS_SIZE];
    subkeys.write_bytes(&mut bytes);
    assert_eq!(&bytes[64..128], &subkeys.subkey_bytes(1).unwrap()[..]);

    let restored = charybdis::Subkeys::from_bytes(&bytes);
    let pt = [0x77u8; 64];
    let (mut a, mut b) = (pt, pt);
    charybdis::encrypt_block(&mut a, &subkeys);
    charybdis::encrypt_block(&mut b, &restored);
    assert_eq!(a, b);
    assert!(subkeys.subkey_bytes(24).is_none());
}

#[test]
fn test_subkeys_debug_redacted() {
    let subkeys = charybdis::key_schedule(&[0x99u8; 32]);
    assert_eq!(format!("{subkeys:?}"), "Subkeys([REDACTED])");
}
