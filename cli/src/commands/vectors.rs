//! Vector Commands
//!
//! Reference vector and subkey dumps in the uppercase hex format of the
//! published test data.

use super::{parse_hex, variant};
use anyhow::Result;
use charybdis::kernels::portable::first_round_state;
use charybdis::{key_schedule_with, Charybdis, REFERENCE_KEY, REFERENCE_PLAINTEXT};

/// Print the reference vector for the selected schedule.
pub fn print_vectors(legacy: bool) {
    let variant = variant(legacy);
    let subkeys = key_schedule_with(&REFERENCE_KEY, variant);
    let cipher = Charybdis::from_subkeys(subkeys.clone());

    let mut ct = REFERENCE_PLAINTEXT;
    cipher.encrypt_block(&mut ct);

    println!("Schedule:   {variant:?}");
    println!("Key:        {}", hex::encode_upper(REFERENCE_KEY));
    println!("Plaintext:  {}", hex::encode_upper(REFERENCE_PLAINTEXT));
    if let Some(k1) = subkeys.subkey_bytes(1) {
        println!("K[1]:       {}", hex::encode_upper(k1));
    }
    println!(
        "Round 1:    {}",
        hex::encode_upper(first_round_state(&REFERENCE_PLAINTEXT, &subkeys))
    );
    println!("Ciphertext: {}", hex::encode_upper(ct));
}

/// Print all subkeys for a hex key.
pub fn print_subkeys(key: &str, legacy: bool) -> Result<()> {
    let key = parse_hex::<32>("key", key)?;
    let subkeys = key_schedule_with(&key, variant(legacy));
    for i in 0..charybdis::NUM_SUBKEYS {
        if let Some(k) = subkeys.subkey_bytes(i) {
            println!("K[{i:>2}] {}", hex::encode_upper(k));
        }
    }
    Ok(())
}
