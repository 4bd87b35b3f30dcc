//! C-API Bindings
//!
//! Exposes Charybdis to C/C++ via FFI with pointer checks and panic boundaries.
//!
//! Return codes: `0` success, `-1` null pointer or bad block count, `-2`
//! caught panic, `-3` stale batch context. Every check runs before the first
//! output byte is written.

#![allow(unsafe_code)]

use crate::cipher;
use crate::kernels::constants::{BLOCK_SIZE, KEY_SIZE};
use crate::types::{Block, Key, Subkeys, SUBKEYS_SIZE};
use zeroize::Zeroize;

use std::ptr;
use std::slice;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use crate::kernels::avx2::BatchContext;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Block size in bytes.
pub const _CHARYBDIS_BLOCK_SIZE: usize = BLOCK_SIZE;
/// Key size in bytes.
pub const _CHARYBDIS_KEY_SIZE: usize = KEY_SIZE;
/// Size of the serialized subkey array (24 x 64 bytes).
pub const _CHARYBDIS_SUBKEYS_SIZE: usize = SUBKEYS_SIZE;

const ERR_NULL: i32 = -1;
const ERR_PANIC: i32 = -2;
const ERR_STALE: i32 = -3;

unsafe fn read_subkeys(subkeys_ptr: *const u8) -> Subkeys {
    let bytes = &*subkeys_ptr.cast::<[u8; SUBKEYS_SIZE]>();
    Subkeys::from_bytes(bytes)
}

// =============================================================================
// KEY SCHEDULE
// =============================================================================

/// Expand a 32-byte key into 24 subkeys (hardened schedule).
///
/// # Safety
/// - `key_ptr` must point to 32 readable bytes
/// - `subkeys_out` must be valid for 1536 writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn charybdis_key_schedule(key_ptr: *const u8, subkeys_out: *mut u8) -> i32 {
    if key_ptr.is_null() || subkeys_out.is_null() {
        return ERR_NULL;
    }

    let result = std::panic::catch_unwind(|| {
        let key = &*key_ptr.cast::<Key>();
        let subkeys = cipher::key_schedule(key);
        subkeys.write_bytes(&mut *subkeys_out.cast::<[u8; SUBKEYS_SIZE]>());
    });

    match result {
        Ok(()) => 0,
        Err(_) => ERR_PANIC,
    }
}

// =============================================================================
// SINGLE BLOCK
// =============================================================================

unsafe fn single_block(
    in_ptr: *const u8,
    out_ptr: *mut u8,
    subkeys_ptr: *const u8,
    op: fn(&mut Block, &Subkeys),
) -> i32 {
    if in_ptr.is_null() || out_ptr.is_null() || subkeys_ptr.is_null() {
        return ERR_NULL;
    }

    let result = std::panic::catch_unwind(|| {
        let subkeys = read_subkeys(subkeys_ptr);
        let mut block: Block = [0u8; BLOCK_SIZE];
        ptr::copy(in_ptr, block.as_mut_ptr(), BLOCK_SIZE);
        op(&mut block, &subkeys);
        ptr::copy(block.as_ptr(), out_ptr, BLOCK_SIZE);
        block.zeroize();
    });

    match result {
        Ok(()) => 0,
        Err(_) => ERR_PANIC,
    }
}

/// Encrypt one 64-byte block with serialized subkeys. `in_ptr` and `out_ptr`
/// may alias.
///
/// # Safety
/// - `in_ptr` must be valid for 64 readable bytes
/// - `out_ptr` must be valid for 64 writable bytes
/// - `subkeys_ptr` must point to 1536 bytes from `charybdis_key_schedule`
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn charybdis_encrypt_block(
    in_ptr: *const u8,
    out_ptr: *mut u8,
    subkeys_ptr: *const u8,
) -> i32 {
    single_block(in_ptr, out_ptr, subkeys_ptr, cipher::encrypt_block)
}

/// Decrypt one 64-byte block. Same contract as `charybdis_encrypt_block`.
///
/// # Safety
/// See `charybdis_encrypt_block`.
#[no_mangle]
pub unsafe extern "C" fn charybdis_decrypt_block(
    in_ptr: *const u8,
    out_ptr: *mut u8,
    subkeys_ptr: *const u8,
) -> i32 {
    single_block(in_ptr, out_ptr, subkeys_ptr, cipher::decrypt_block)
}

// =============================================================================
// CAPABILITY
// =============================================================================

/// `1` if the AVX2 batch engine can run on this host, `0` otherwise.
#[no_mangle]
pub extern "C" fn charybdis_avx2_available() -> i32 {
    i32::from(crate::avx2_available())
}

/// Get the name of the active backend.
///
/// # Returns
/// A pointer to a static, null-terminated C string (e.g. `"AVX2 (8-way)"`).
/// Must NOT be freed by the caller.
#[no_mangle]
pub extern "C" fn charybdis_backend_name() -> *const std::os::raw::c_char {
    crate::engine::dispatcher::active_backend_cstr()
        .as_ptr()
        .cast::<std::os::raw::c_char>()
}

// =============================================================================
// BATCH API
// =============================================================================

/// Opaque batch handle for C.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub struct CharybdisBatch(BatchContext);

/// Create a batch context from serialized subkeys. Returns NULL if a pointer
/// is null or AVX2 is unavailable. Caller must free with `charybdis_batch_free`.
///
/// # Safety
/// - `subkeys_ptr` must point to 1536 bytes from `charybdis_key_schedule`
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[no_mangle]
pub unsafe extern "C" fn charybdis_batch_new(subkeys_ptr: *const u8) -> *mut CharybdisBatch {
    if subkeys_ptr.is_null() {
        return ptr::null_mut();
    }
    let subkeys = read_subkeys(subkeys_ptr);
    let Ok(ctx) = BatchContext::new(&subkeys) else {
        return ptr::null_mut();
    };
    Box::into_raw(Box::new(CharybdisBatch(ctx)))
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
unsafe fn batch_call(
    ctx_ptr: *const CharybdisBatch,
    in_ptr: *const u8,
    out_ptr: *mut u8,
    nblocks: usize,
    op: fn(&BatchContext, &mut [Block]) -> Result<(), crate::CipherError>,
) -> i32 {
    if ctx_ptr.is_null() || in_ptr.is_null() || out_ptr.is_null() || nblocks == 0 {
        return ERR_NULL;
    }
    let Some(len) = nblocks.checked_mul(BLOCK_SIZE) else {
        return ERR_NULL;
    };
    let ctx = &(*ctx_ptr).0;
    if !ctx.is_valid() {
        return ERR_STALE;
    }

    let result = std::panic::catch_unwind(|| {
        // Overlapping buffers are allowed: copy first, then work in place.
        ptr::copy(in_ptr, out_ptr, len);
        let blocks = slice::from_raw_parts_mut(out_ptr.cast::<Block>(), nblocks);
        op(ctx, blocks)
    });

    match result {
        Ok(Ok(())) => 0,
        Ok(Err(_)) => ERR_STALE,
        Err(_) => ERR_PANIC,
    }
}

/// Encrypt `nblocks` consecutive 64-byte blocks. Buffers may alias.
///
/// # Safety
/// - `ctx_ptr` must come from `charybdis_batch_new` and not be freed
/// - `in_ptr` and `out_ptr` must be valid for `nblocks * 64` bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer, `nblocks == 0`, or `nblocks * 64` overflows
/// - `-2`: Panic
/// - `-3`: Context erased or corrupted
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[no_mangle]
pub unsafe extern "C" fn charybdis_batch_encrypt(
    ctx_ptr: *const CharybdisBatch,
    in_ptr: *const u8,
    out_ptr: *mut u8,
    nblocks: usize,
) -> i32 {
    batch_call(ctx_ptr, in_ptr, out_ptr, nblocks, BatchContext::encrypt_blocks)
}

/// Decrypt `nblocks` consecutive 64-byte blocks. Same contract as
/// `charybdis_batch_encrypt`.
///
/// # Safety
/// See `charybdis_batch_encrypt`.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[no_mangle]
pub unsafe extern "C" fn charybdis_batch_decrypt(
    ctx_ptr: *const CharybdisBatch,
    in_ptr: *const u8,
    out_ptr: *mut u8,
    nblocks: usize,
) -> i32 {
    batch_call(ctx_ptr, in_ptr, out_ptr, nblocks, BatchContext::decrypt_blocks)
}

/// Erase and free a batch context.
///
/// # Safety
/// - `ctx_ptr` must come from `charybdis_batch_new`, or be null
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[no_mangle]
pub unsafe extern "C" fn charybdis_batch_free(ctx_ptr: *mut CharybdisBatch) {
    if !ctx_ptr.is_null() {
        drop(Box::from_raw(ctx_ptr));
    }
}

// =============================================================================
// SECURE ERASE
// =============================================================================

/// Overwrite `len` bytes with zeros using volatile writes the compiler cannot
/// elide.
///
/// # Safety
/// - `ptr` must be valid for `len` writable bytes
///
/// # Returns
/// - `0`: Success (including `len == 0`)
/// - `-1`: Null pointer
#[no_mangle]
pub unsafe extern "C" fn charybdis_secure_erase(ptr: *mut u8, len: usize) -> i32 {
    if ptr.is_null() {
        return ERR_NULL;
    }
    slice::from_raw_parts_mut(ptr, len).zeroize();
    0
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selftest::{KNOWN_ANSWERS, REFERENCE_KEY, REFERENCE_PLAINTEXT};

    fn subkeys_bytes() -> [u8; SUBKEYS_SIZE] {
        let mut out = [0u8; SUBKEYS_SIZE];
        // SAFETY: both buffers have the documented sizes.
        let rc = unsafe { charybdis_key_schedule(REFERENCE_KEY.as_ptr(), out.as_mut_ptr()) };
        assert_eq!(rc, 0);
        out
    }

    #[test]
    fn test_null_pointers_rejected() {
        let mut out = [0u8; SUBKEYS_SIZE];
        // SAFETY: null pointers are checked before any access.
        unsafe {
            assert_eq!(charybdis_key_schedule(ptr::null(), out.as_mut_ptr()), -1);
            assert_eq!(charybdis_encrypt_block(ptr::null(), out.as_mut_ptr(), out.as_ptr()), -1);
            assert_eq!(charybdis_decrypt_block(out.as_ptr(), ptr::null_mut(), out.as_ptr()), -1);
            assert_eq!(charybdis_secure_erase(ptr::null_mut(), 8), -1);
        }
        assert!(out.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_block_api_matches_vector() {
        let subkeys = subkeys_bytes();
        let mut block = REFERENCE_PLAINTEXT;
        let hardened = &KNOWN_ANSWERS[0];
        // SAFETY: in and out alias one 64-byte buffer, which is allowed.
        unsafe {
            let p = block.as_mut_ptr();
            assert_eq!(charybdis_encrypt_block(p, p, subkeys.as_ptr()), 0);
            assert_eq!(block, hardened.ciphertext);
            assert_eq!(charybdis_decrypt_block(p, p, subkeys.as_ptr()), 0);
        }
        assert_eq!(block, REFERENCE_PLAINTEXT);
    }

    #[test]
    fn test_secure_erase() {
        let mut buf = [0xEEu8; 100];
        // SAFETY: `buf` is 100 writable bytes.
        assert_eq!(unsafe { charybdis_secure_erase(buf.as_mut_ptr(), buf.len()) }, 0);
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_backend_name_is_nul_terminated() {
        let name = charybdis_backend_name();
        // SAFETY: the pointer refers to a static NUL-terminated string.
        let s = unsafe { std::ffi::CStr::from_ptr(name) };
        assert_eq!(s.to_str().ok(), Some(crate::active_backend().name()));
        assert_eq!(charybdis_avx2_available(), i32::from(crate::avx2_available()));
    }

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    #[test]
    fn test_batch_api() {
        let subkeys = subkeys_bytes();
        // SAFETY: `subkeys` holds 1536 bytes.
        let ctx = unsafe { charybdis_batch_new(subkeys.as_ptr()) };
        if ctx.is_null() {
            println!("Skipping: AVX2 not supported on this CPU");
            return;
        }
        let input = REFERENCE_PLAINTEXT.repeat(9);
        let mut output = vec![0u8; input.len()];
        // SAFETY: both buffers hold 9 blocks; `ctx` is live until freed below.
        unsafe {
            assert_eq!(charybdis_batch_encrypt(ctx, input.as_ptr(), output.as_mut_ptr(), 0), -1);
            let huge = usize::MAX / BLOCK_SIZE + 1;
            assert_eq!(charybdis_batch_encrypt(ctx, input.as_ptr(), output.as_mut_ptr(), huge), -1);
            assert_eq!(charybdis_batch_decrypt(ctx, input.as_ptr(), output.as_mut_ptr(), huge), -1);
            assert!(output.iter().all(|&b| b == 0));
            assert_eq!(charybdis_batch_encrypt(ctx, input.as_ptr(), output.as_mut_ptr(), 9), 0);
            for chunk in output.chunks_exact(BLOCK_SIZE) {
                assert_eq!(chunk, KNOWN_ANSWERS[0].ciphertext);
            }
            let p = output.as_mut_ptr();
            assert_eq!(charybdis_batch_decrypt(ctx, p, p, 9), 0);
            assert_eq!(output, input);

            (*ctx).0.clear();
            assert_eq!(charybdis_batch_encrypt(ctx, input.as_ptr(), p, 9), -3);
            assert_eq!(output, input);
            charybdis_batch_free(ctx);
        }
    }
}
