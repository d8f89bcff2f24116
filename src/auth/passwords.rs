/**
 * Password Hashing
 *
 * One-way adaptive hashing for stored credentials. bcrypt embeds a
 * per-call random salt in its output, so two hashes of the same
 * plaintext never compare equal; verification re-derives from the
 * embedded salt.
 *
 * Plaintext is trimmed before hashing and both sides are trimmed before
 * verification, so surrounding whitespace never affects the outcome.
 */

use bcrypt::BcryptError;

/// bcrypt work factor for stored credentials
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password for storage
///
/// A failure here is fatal to the calling request and surfaces as a
/// generic server error.
pub fn hash_password(plain: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plain.trim(), HASH_COST)
}

/// Verify a plaintext password against a stored hash
///
/// Never errors: a malformed stored hash counts as a mismatch, not a
/// failure, so the caller always gets a plain boolean.
pub fn verify_password(plain: &str, hash: &str) -> bool {
    match bcrypt::verify(plain.trim(), hash.trim()) {
        Ok(matched) => matched,
        Err(err) => {
            tracing::warn!("Password verification against malformed hash: {:?}", err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("secret").unwrap();
        assert!(verify_password("secret", &hash));
    }

    #[test]
    fn test_hash_is_not_the_plaintext() {
        let hash = hash_password("secret").unwrap();
        assert_ne!(hash, "secret");
    }

    #[test]
    fn test_wrong_password_is_a_mismatch() {
        let hash = hash_password("secret").unwrap();
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_salt_varies_per_call() {
        let first = hash_password("secret").unwrap();
        let second = hash_password("secret").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("secret", &first));
        assert!(verify_password("secret", &second));
    }

    #[test]
    fn test_whitespace_is_trimmed_on_both_sides() {
        let hash = hash_password("  secret  ").unwrap();
        assert!(verify_password("secret", &hash));
        assert!(verify_password("  secret  ", &hash));

        let padded_hash = format!("  {}  ", hash);
        assert!(verify_password("secret", &padded_hash));
    }

    #[test]
    fn test_malformed_hash_is_a_mismatch_not_an_error() {
        assert!(!verify_password("secret", "not-a-bcrypt-hash"));
        assert!(!verify_password("secret", ""));
    }
}
