//! CLI Commands
//!
//! All charybdis CLI commands organized as separate modules.

mod block;
mod info;
mod vectors;

pub use block::{block_op, BlockOp};
pub use info::{backend, selftest};
pub use vectors::{print_subkeys, print_vectors};

use anyhow::{bail, Context, Result};
use charybdis::KeyScheduleVariant;
use zeroize::Zeroizing;

/// Decode exactly `N` bytes of hex, naming `what` in errors. Both the decoded
/// buffer and the result are wiped on drop.
fn parse_hex<const N: usize>(what: &str, s: &str) -> Result<Zeroizing<[u8; N]>> {
    let bytes = Zeroizing::new(
        hex::decode(s.trim()).with_context(|| format!("{what} is not valid hex"))?,
    );
    if bytes.len() != N {
        bail!("{what} must be {N} bytes ({} hex digits), got {}", 2 * N, bytes.len());
    }
    let mut out = Zeroizing::new([0u8; N]);
    out.copy_from_slice(&bytes);
    Ok(out)
}

const fn variant(legacy: bool) -> KeyScheduleVariant {
    if legacy {
        KeyScheduleVariant::Legacy
    } else {
        KeyScheduleVariant::Hardened
    }
}
