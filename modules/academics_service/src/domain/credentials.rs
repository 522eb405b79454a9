//! Credential hashing and verification
//!
//! Password digests are argon2 PHC strings. The trait exists so tests can
//! swap in a transparent implementation; production code always uses
//! [`Argon2Credentials`].

use crate::contract::AcademicsError;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hash/verify capability injected into the service
pub trait CredentialVerifier: Send + Sync {
    /// Hash a raw password into a storable digest
    fn hash(&self, password: &str) -> Result<String, AcademicsError>;

    /// Check a raw password against a stored digest
    ///
    /// An unparseable digest verifies as false rather than erroring; a
    /// corrupt row must not be distinguishable from a wrong password.
    fn verify(&self, digest: &str, password: &str) -> bool;
}

/// Production argon2id implementation
#[derive(Clone, Default)]
pub struct Argon2Credentials;

impl CredentialVerifier for Argon2Credentials {
    fn hash(&self, password: &str) -> Result<String, AcademicsError> {
        let mut salt_bytes = [0u8; 16];
        getrandom::getrandom(&mut salt_bytes).map_err(|_| AcademicsError::Internal)?;
        let salt = SaltString::encode_b64(&salt_bytes).map_err(|_| AcademicsError::Internal)?;

        let phc = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| AcademicsError::Internal)?
            .to_string();
        Ok(phc)
    }

    fn verify(&self, digest: &str, password: &str) -> bool {
        if let Ok(parsed) = PasswordHash::new(digest) {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        } else {
            false
        }
    }
}

/// Transparent implementation for tests: the "digest" is the password
///
/// Keeps fixtures readable and avoids paying argon2 cost in every test.
#[derive(Clone, Default)]
pub struct PlainTextCredentials;

impl CredentialVerifier for PlainTextCredentials {
    fn hash(&self, password: &str) -> Result<String, AcademicsError> {
        Ok(password.to_string())
    }

    fn verify(&self, digest: &str, password: &str) -> bool {
        digest == password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argon2_roundtrip() {
        let creds = Argon2Credentials;
        let digest = creds.hash("correct horse battery staple").unwrap();

        assert!(digest.starts_with("$argon2"));
        assert!(creds.verify(&digest, "correct horse battery staple"));
        assert!(!creds.verify(&digest, "wrong password"));
    }

    #[test]
    fn test_argon2_salts_differ() {
        let creds = Argon2Credentials;
        let first = creds.hash("same password").unwrap();
        let second = creds.hash("same password").unwrap();

        assert_ne!(first, second);
        assert!(creds.verify(&first, "same password"));
        assert!(creds.verify(&second, "same password"));
    }

    #[test]
    fn test_garbage_digest_verifies_false() {
        let creds = Argon2Credentials;
        assert!(!creds.verify("not-a-phc-string", "anything"));
        assert!(!creds.verify("", "anything"));
    }

    #[test]
    fn test_plain_text_double() {
        let creds = PlainTextCredentials;
        let digest = creds.hash("pw").unwrap();
        assert_eq!(digest, "pw");
        assert!(creds.verify("pw", "pw"));
        assert!(!creds.verify("pw", "other"));
    }
}
