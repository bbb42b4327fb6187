//! Keygen command - prints a fresh signing key

use crate::domain::KeyPair;

/// Print a new private key and its public fingerprint
pub fn run() -> anyhow::Result<()> {
    let key_pair = KeyPair::generate();

    println!("private_key_hex: {}", key_pair.private_key_hex());
    println!("fingerprint:     {}", key_pair.fingerprint());

    Ok(())
}
