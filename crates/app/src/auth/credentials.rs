//! Password verifiers.
//!
//! Passwords are stored as `sha256$<rounds>$<salt-hex>$<digest-hex>` and
//! compared in constant time.

use constant_time_eq::constant_time_eq;
use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};

use crate::auth::hex;

const SCHEME: &str = "sha256";
const SALT_BYTES: usize = 16;
const DIGEST_BYTES: usize = 32;
const DEFAULT_ROUNDS: u32 = 25_000;

/// Derive a salted verifier for `password`.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut salt = [0_u8; SALT_BYTES];

    OsRng.fill_bytes(&mut salt);

    hash_with(password, &salt, DEFAULT_ROUNDS)
}

/// Check `password` against a verifier produced by [`hash_password`].
///
/// Malformed verifiers never match.
#[must_use]
pub fn verify_password(password: &str, verifier: &str) -> bool {
    let mut parts = verifier.split('$');

    let (Some(SCHEME), Some(rounds), Some(salt), Some(digest), None) = (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) else {
        return false;
    };

    let Ok(rounds) = rounds.parse::<u32>() else {
        return false;
    };

    let (Some(salt), Some(expected)) = (
        hex::decode_array::<SALT_BYTES>(salt),
        hex::decode_array::<DIGEST_BYTES>(digest),
    ) else {
        return false;
    };

    constant_time_eq(&stretch(password, &salt, rounds), &expected)
}

fn hash_with(password: &str, salt: &[u8; SALT_BYTES], rounds: u32) -> String {
    format!(
        "{SCHEME}${rounds}${}${}",
        hex::encode(salt),
        hex::encode(&stretch(password, salt, rounds))
    )
}

fn stretch(password: &str, salt: &[u8], rounds: u32) -> [u8; DIGEST_BYTES] {
    let mut digest: [u8; DIGEST_BYTES] = Sha256::new()
        .chain_update(salt)
        .chain_update(password.as_bytes())
        .finalize()
        .into();

    for _ in 1..rounds {
        digest = Sha256::new()
            .chain_update(digest)
            .chain_update(salt)
            .finalize()
            .into();
    }

    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies() {
        let verifier = hash_password("correct horse");

        assert!(verifier.starts_with("sha256$"), "verifier names its scheme");
        assert!(verify_password("correct horse", &verifier));
        assert!(!verify_password("wrong horse", &verifier));
    }

    #[test]
    fn salts_differ_between_hashes() {
        assert_ne!(hash_password("secret"), hash_password("secret"));
    }

    #[test]
    fn known_vector_verifies() {
        let verifier = hash_with("password", &[7; SALT_BYTES], 3);

        assert!(verify_password("password", &verifier));
        assert!(!verify_password("password", &verifier.replace("$3$", "$4$")));
    }

    #[test]
    fn plaintext_is_not_a_verifier() {
        assert!(!verify_password("password", "password"));
        assert!(!verify_password("", ""));
        assert!(!verify_password("pw", "sha256$x$00$00"));
    }
}
