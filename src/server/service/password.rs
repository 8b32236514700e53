//! Salted, iterated SHA-256 password hashing.
//!
//! Hashes are stored as `sha256$<rounds>$<salt>$<digest>` with base64 (no padding) salt and
//! digest, so the round count can be raised later without invalidating stored hashes.

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

const ALGORITHM: &str = "sha256";
const ROUNDS: u32 = 10_000;
const SALT_LEN: usize = 16;

/// Hashes `password` with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let salt: [u8; SALT_LEN] = rand::random();
    let digest = derive(password.as_bytes(), &salt, ROUNDS);

    format!(
        "{}${}${}${}",
        ALGORITHM,
        ROUNDS,
        STANDARD_NO_PAD.encode(salt),
        STANDARD_NO_PAD.encode(digest)
    )
}

/// Checks `password` against a hash produced by [`hash_password`].
///
/// Malformed or foreign hashes never verify.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.split('$');
    let (Some(algorithm), Some(rounds), Some(salt), Some(digest), None) = (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) else {
        return false;
    };

    if algorithm != ALGORITHM {
        return false;
    }

    let Some(rounds) = rounds.parse::<u32>().ok().filter(|rounds| *rounds > 0) else {
        return false;
    };
    let (Ok(salt), Ok(expected)) = (STANDARD_NO_PAD.decode(salt), STANDARD_NO_PAD.decode(digest))
    else {
        return false;
    };

    let actual = derive(password.as_bytes(), &salt, rounds);

    actual.as_slice().ct_eq(expected.as_slice()).into()
}

fn derive(password: &[u8], salt: &[u8], rounds: u32) -> [u8; 32] {
    let mut digest: [u8; 32] = Sha256::new()
        .chain_update(salt)
        .chain_update(password)
        .finalize()
        .into();

    for _ in 1..rounds {
        digest = Sha256::new()
            .chain_update(digest)
            .chain_update(password)
            .finalize()
            .into();
    }

    digest
}
