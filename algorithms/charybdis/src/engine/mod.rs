//! Execution Engine
//!
//! CPU dispatch and parallel processing.

pub mod dispatcher;
pub mod parallel;

pub use dispatcher::{active_backend, avx2_available};
