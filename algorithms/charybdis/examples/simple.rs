//! Charybdis Basic Example
//!
//! Minimal usage: `Charybdis::new(&key).encrypt_block(&mut block);`

#![allow(clippy::pedantic, clippy::nursery)]

use charybdis::Charybdis;

fn main() {
    let key = [0x2Au8; 32];
    let cipher = Charybdis::new(&key);

    let mut block = *b"Hello, World! Sixty-four bytes make exactly one Charybdis block.";
    let plaintext = block;
    cipher.encrypt_block(&mut block);

    println!("Backend:    {}", cipher.backend());
    println!("Plaintext:  {}", String::from_utf8_lossy(&plaintext));
    println!("Ciphertext: {}", hex::encode(block));

    cipher.decrypt_block(&mut block);
    assert_eq!(block, plaintext);
}
