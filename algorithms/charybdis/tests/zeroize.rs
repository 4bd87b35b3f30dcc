//! Secure Erase Tests
//!
//! Key material must be gone after an explicit wipe and after drop.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use charybdis::{Charybdis, CipherError};
use std::mem::ManuallyDrop;
use std::ptr;
use zeroize::Zeroize;

fn all_zero(subkeys: &charybdis::Subkeys) -> bool {
    subkeys.matrices().iter().flatten().flatten().all(|&w| w == 0)
}

#[test]
fn test_subkeys_zeroize() {
    let mut subkeys = charybdis::key_schedule(&[0xA5u8; 32]);
    assert!(!all_zero(&subkeys));
    subkeys.zeroize();
    assert!(all_zero(&subkeys));
}

#[test]
fn test_cipher_clear() {
    let mut cipher = Charybdis::new(&[0xA5u8; 32]);
    cipher.clear();
    assert!(all_zero(cipher.subkeys()));

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    if let Some(batch) = cipher.batch() {
        assert!(!batch.is_valid());
        assert!(all_zero(batch.subkeys()));
    }
}

#[test]
fn test_cleared_batch_context_rejected() {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        let subkeys = charybdis::key_schedule(&[0x3Cu8; 32]);
        let Ok(mut ctx) = charybdis::BatchContext::new(&subkeys) else {
            println!("Skipping: AVX2 not supported on this CPU");
            return;
        };
        assert!(ctx.is_valid());
        ctx.zeroize();
        let mut blocks = [[1u8; 64]; 16];
        assert_eq!(ctx.encrypt_blocks(&mut blocks), Err(CipherError::InvalidContext));
        assert_eq!(blocks, [[1u8; 64]; 16]);
    }
}

#[test]
fn test_single_block_after_clear_uses_zero_subkeys() {
    let mut cipher = Charybdis::new(&[0xA5u8; 32]);
    cipher.clear();
    let zero = charybdis::Subkeys::from_bytes(&[0u8; charybdis::SUBKEYS_SIZE]);

    let (mut a, mut b) = ([9u8; 64], [9u8; 64]);
    cipher.encrypt_block(&mut a);
    charybdis::encrypt_block(&mut b, &zero);
    assert_eq!(a, b);

    let mut data = [0u8; 64];
    assert_eq!(cipher.encrypt_blocks(&mut data), Err(CipherError::InvalidContext));
}

// =============================================================================
// DROP
// =============================================================================

#[test]
#[allow(unsafe_code)]
fn test_subkeys_wiped_on_drop() {
    let mut subkeys = ManuallyDrop::new(charybdis::key_schedule(&[0xA5u8; 32]));
    assert!(!all_zero(&subkeys));
    // SAFETY: dropped exactly once; the storage stays allocated in the
    // `ManuallyDrop` and holds only plain words.
    unsafe { ptr::drop_in_place(&mut *subkeys) };
    assert!(all_zero(&subkeys));
}

#[test]
#[allow(unsafe_code)]
fn test_cipher_wiped_on_drop() {
    let mut cipher = ManuallyDrop::new(Charybdis::new(&[0x1Fu8; 32]));
    assert!(!all_zero(cipher.subkeys()));
    // SAFETY: as above.
    unsafe { ptr::drop_in_place(&mut *cipher) };
    assert!(all_zero(cipher.subkeys()));

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    if let Some(batch) = cipher.batch() {
        assert!(!batch.is_valid());
        assert!(all_zero(batch.subkeys()));
    }
}

#[test]
#[allow(unsafe_code)]
fn test_batch_context_wiped_on_drop() {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        let subkeys = charybdis::key_schedule(&[0x77u8; 32]);
        let Ok(ctx) = charybdis::BatchContext::new(&subkeys) else {
            println!("Skipping: AVX2 not supported on this CPU");
            return;
        };
        let mut ctx = ManuallyDrop::new(ctx);
        assert!(ctx.is_valid());
        // SAFETY: as above.
        unsafe { ptr::drop_in_place(&mut *ctx) };
        assert!(!ctx.is_valid());
        assert!(all_zero(ctx.subkeys()));
    }
}
