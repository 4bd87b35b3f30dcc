//! AVX2 Kernel Module
//!
//! 8-way batch engine: one YMM register per state cell, lane `b` carrying
//! block `b` of the group. Round logic is the generic layer instantiated for
//! [`Lanes`].

mod batch;
mod lanes;
pub mod transpose;

// Re-export public API
pub use batch::BatchContext;
pub use lanes::Lanes;
