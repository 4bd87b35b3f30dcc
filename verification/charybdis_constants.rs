//! # Constant Table Verification
//!
//! Re-derives every constant table from its public SHAKE256 seed and checks
//! it against the tables compiled into the library. `--emit` prints the
//! derived tables as Rust source instead.

use anyhow::{bail, Result};
use charybdis::kernels::constants::{
    KS_DOMAIN_CONSTANTS, KS_INIT, KS_ROUND_CONSTANTS, ROUND_CONSTANTS,
};
use clap::Parser;
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;

const ROUND_SEED: &str = "Charybdis-v1.0";
const SCHEDULE_SEED: &str = "Charybdis-Constants-v1.0";

#[derive(Parser)]
#[command(name = "charybdis_constants")]
#[command(about = "Verify the SHAKE256-derived constant tables")]
struct Cli {
    /// Print the derived tables as Rust constants
    #[arg(long)]
    emit: bool,
}

// =============================================================================
// DERIVATION
// =============================================================================

/// First `count` big-endian words of SHAKE256(`seed`).
fn shake_words(seed: &str, count: usize) -> Vec<u32> {
    let mut hasher = Shake256::default();
    hasher.update(seed.as_bytes());
    let mut reader = hasher.finalize_xof();
    let mut bytes = vec![0u8; count * 4];
    reader.read(&mut bytes);
    bytes
        .chunks_exact(4)
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

fn emit(name: &str, words: &[u32]) {
    println!("pub const {name}: [u32; {}] = [", words.len());
    for row in words.chunks(8) {
        let line: Vec<String> = row.iter().map(|w| format!("0x{w:08X}")).collect();
        println!("    {},", line.join(", "));
    }
    println!("];\n");
}

fn check(name: &str, compiled: &[u32], derived: &[u32]) -> bool {
    match compiled.iter().zip(derived).position(|(a, b)| a != b) {
        None if compiled.len() == derived.len() => {
            println!("{name:<20} {:>4} words: OK", compiled.len());
            true
        }
        None => {
            println!("{name:<20} length {} != {}: FAILED", compiled.len(), derived.len());
            false
        }
        Some(i) => {
            println!(
                "{name:<20} word {i}: compiled 0x{:08X}, derived 0x{:08X}: FAILED",
                compiled[i], derived[i]
            );
            false
        }
    }
}

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Entry point for the constant verifier.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let round = shake_words(ROUND_SEED, ROUND_CONSTANTS.len());
    let schedule = shake_words(
        SCHEDULE_SEED,
        KS_INIT.len() + KS_ROUND_CONSTANTS.len() + KS_DOMAIN_CONSTANTS.len(),
    );
    let (init, rest) = schedule.split_at(KS_INIT.len());
    let (ks_round, domain) = rest.split_at(KS_ROUND_CONSTANTS.len());

    if cli.emit {
        emit("ROUND_CONSTANTS", &round);
        emit("KS_INIT", init);
        emit("KS_ROUND_CONSTANTS", ks_round);
        emit("KS_DOMAIN_CONSTANTS", domain);
        return Ok(());
    }

    let results = [
        check("ROUND_CONSTANTS", &ROUND_CONSTANTS, &round),
        check("KS_INIT", &KS_INIT, init),
        check("KS_ROUND_CONSTANTS", &KS_ROUND_CONSTANTS, ks_round),
        check("KS_DOMAIN_CONSTANTS", &KS_DOMAIN_CONSTANTS, domain),
    ];

    let failed = results.iter().filter(|ok| !**ok).count();
    if failed > 0 {
        bail!("{failed} of {} tables do NOT match their seed", results.len());
    }
    println!("\nAll {} tables verified", results.len());
    Ok(())
}
