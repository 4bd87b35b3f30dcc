//! Info Commands
//!
//! Self-test and backend reporting.

use anyhow::{Context, Result};

// =============================================================================
// SELFTEST
// =============================================================================

/// Run the known-answer self-test.
pub fn selftest() -> Result<()> {
    charybdis::self_test().context("Self-test FAILED")?;
    for v in &charybdis::KNOWN_ANSWERS {
        println!("{}: OK", v.name);
    }
    println!();
    println!(
        "All {} vectors verified ({})",
        charybdis::KNOWN_ANSWERS.len(),
        charybdis::active_backend()
    );
    Ok(())
}

// =============================================================================
// BACKEND
// =============================================================================

/// Print the active backend and capability flags.
pub fn backend() {
    println!("Backend: {}", charybdis::active_backend());
    println!("AVX2:    {}", if charybdis::avx2_available() { "yes" } else { "no" });
    println!("Lanes:   {}", if charybdis::avx2_available() { 8 } else { 1 });
}
