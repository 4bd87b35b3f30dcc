//! Hardware Dispatcher
//!
//! Answers one question: may the AVX2 batch engine run on this host?

use crate::types::Backend;

/// Work unit per parallel task: 64 KiB (1024 blocks, a multiple of 8).
pub const CHUNK_BLOCKS: usize = 1024;

// =============================================================================
// CAPABILITY
// =============================================================================

/// Whether the CPU supports AVX2 and the OS saves YMM state across context
/// switches.
///
/// With `std` this is a runtime CPUID + XGETBV probe (cached by std). Without
/// it the answer is fixed at compile time by `target_feature`.
#[must_use]
#[inline]
pub fn avx2_available() -> bool {
    cfg_if::cfg_if! {
        if #[cfg(all(feature = "std", any(target_arch = "x86", target_arch = "x86_64")))] {
            std::is_x86_feature_detected!("avx2")
        } else if #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "avx2"))] {
            true
        } else {
            false
        }
    }
}

/// Backend that multi-block calls use on this host.
#[must_use]
pub fn active_backend() -> Backend {
    let backend = if avx2_available() {
        Backend::Avx2
    } else {
        Backend::Portable
    };
    tracing::debug!(%backend, "backend selected");
    backend
}

/// NUL-terminated backend name for the C API.
#[cfg(feature = "std")]
#[must_use]
pub fn active_backend_cstr() -> &'static str {
    match active_backend() {
        Backend::Avx2 => "AVX2 (8-way)\0",
        Backend::Portable => "Portable\0",
    }
}
