//! Kernel Dispatcher
//!
//! Scalar and SIMD implementations of the Charybdis primitive.

pub mod arx;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod avx2;
pub mod constants;
pub mod portable;
pub mod round;
pub mod sponge;
pub mod word;
