//! Block Commands
//!
//! Encrypt or decrypt one block given on the command line.

use super::{parse_hex, variant};
use anyhow::Result;
use charybdis::Charybdis;

/// Direction of a single-block command.
#[derive(Copy, Clone, Debug)]
pub enum BlockOp {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

/// Run one block through the cipher and print it as uppercase hex.
pub fn block_op(op: BlockOp, key: &str, block: &str, legacy: bool) -> Result<()> {
    let key = parse_hex::<32>("key", key)?;
    let mut block = parse_hex::<64>("block", block)?;

    let cipher = Charybdis::with_schedule(&key, variant(legacy));
    match op {
        BlockOp::Encrypt => cipher.encrypt_block(&mut block),
        BlockOp::Decrypt => cipher.decrypt_block(&mut block),
    }
    tracing::info!(?op, backend = %cipher.backend(), "block processed");

    println!("{}", hex::encode_upper(&*block));
    Ok(())
}
