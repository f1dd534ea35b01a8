//! Password hashing for account credentials.
//!
//! Passwords are never stored or compared in the clear. The stored form
//! is `pbkdf2-sha256$<iterations>$<salt b64>$<hash b64>`, and
//! verification re-derives with the iteration count embedded in the
//! stored string, so old hashes keep verifying after the default is
//! raised.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;

pub const PBKDF2_ITERATIONS: u32 = 600_000;
pub const SALT_LENGTH: usize = 16;
pub const HASH_LENGTH: usize = 32;

const SCHEME: &str = "pbkdf2-sha256";

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LENGTH];
    rand::thread_rng().fill_bytes(&mut salt);
    encode(password, &salt, PBKDF2_ITERATIONS)
}

/// Verify a password against a stored encoded hash.
///
/// Malformed stored values verify as false rather than erroring; the
/// comparison itself is constant-time.
pub fn verify_password(password: &str, encoded: &str) -> bool {
    let mut parts = encoded.split('$');
    let (Some(scheme), Some(iters), Some(salt), Some(hash), None) = (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) else {
        return false;
    };
    if scheme != SCHEME {
        return false;
    }
    let Ok(iterations) = iters.parse::<u32>() else {
        return false;
    };
    let (Ok(salt), Ok(stored)) = (B64.decode(salt), B64.decode(hash)) else {
        return false;
    };

    let mut derived = [0u8; HASH_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, iterations, &mut derived);

    stored.ct_eq(&derived).unwrap_u8() == 1
}

fn encode(password: &str, salt: &[u8], iterations: u32) -> String {
    let mut hash = [0u8; HASH_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut hash);
    format!(
        "{SCHEME}${iterations}${}${}",
        B64.encode(salt),
        B64.encode(hash)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // Keep test hashes cheap; verification honors the embedded count.
    fn cheap_hash(password: &str) -> String {
        encode(password, b"0123456789abcdef", 1_000)
    }

    #[test]
    fn stored_form_is_not_the_plaintext() {
        let encoded = cheap_hash("hunter2");
        assert!(!encoded.contains("hunter2"));
        assert!(encoded.starts_with("pbkdf2-sha256$"));
    }

    #[test]
    fn correct_password_verifies() {
        let encoded = cheap_hash("correct horse");
        assert!(verify_password("correct horse", &encoded));
    }

    #[test]
    fn wrong_password_fails() {
        let encoded = cheap_hash("correct horse");
        assert!(!verify_password("battery staple", &encoded));
    }

    #[test]
    fn malformed_stored_value_fails_closed() {
        assert!(!verify_password("anything", ""));
        assert!(!verify_password("anything", "plaintext-leftover"));
        assert!(!verify_password("anything", "pbkdf2-sha256$notanumber$AA$AA"));
        assert!(!verify_password("anything", "md5$1000$AA$AA"));
    }

    #[test]
    fn salts_differ_between_hashes() {
        let a = hash_password("same");
        let b = hash_password("same");
        assert_ne!(a, b);
        assert!(verify_password("same", &a));
        assert!(verify_password("same", &b));
    }
}
