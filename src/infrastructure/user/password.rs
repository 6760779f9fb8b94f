//! Password storage policies
//!
//! `PlaintextPasswords` keeps the password exactly as typed and compares by
//! equality. Accounts created by earlier releases were stored this way, so it
//! stays the default. It must not be used for new deployments: select
//! `argon2` through `security.password_storage`.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::fmt::Debug;
use std::sync::Arc;

use crate::config::PasswordStorage;
use crate::domain::DomainError;

/// Trait for turning a password into its stored form and checking it later
pub trait PasswordHasher: Send + Sync + Debug {
    /// Stored form of a password
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a password against its stored form
    fn verify(&self, password: &str, stored: &str) -> bool;
}

/// Stores passwords unchanged
#[derive(Debug, Clone, Default)]
pub struct PlaintextPasswords;

impl PasswordHasher for PlaintextPasswords {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(password.to_string())
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        password == stored
    }
}

/// Argon2-based password hasher
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    /// Create a new Argon2 hasher
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        let parsed_hash = match PasswordHash::new(stored) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

/// Hasher for the configured storage policy
pub fn hasher_for(storage: PasswordStorage) -> Arc<dyn PasswordHasher> {
    match storage {
        PasswordStorage::Plaintext => Arc::new(PlaintextPasswords),
        PasswordStorage::Argon2 => Arc::new(Argon2Hasher::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plaintext_round_trip() {
        let hasher = PlaintextPasswords;

        let stored = hasher.hash("Abcdef1234!").unwrap();

        assert_eq!(stored, "Abcdef1234!");
        assert!(hasher.verify("Abcdef1234!", &stored));
        assert!(!hasher.verify("abcdef1234!", &stored));
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2Hasher::new();
        let password = "Abcdef1234!";

        let hash = hasher.hash(password).unwrap();

        assert_ne!(hash, password);
        assert!(hasher.verify(password, &hash));
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn test_hash_is_unique() {
        let hasher = Argon2Hasher::new();
        let password = "Abcdef1234!";

        let hash1 = hasher.hash(password).unwrap();
        let hash2 = hasher.hash(password).unwrap();

        // Hashes should be different due to random salt
        assert_ne!(hash1, hash2);
        assert!(hasher.verify(password, &hash1));
        assert!(hasher.verify(password, &hash2));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = Argon2Hasher::new();

        assert!(!hasher.verify("password", "invalid_hash_format"));
        assert!(!hasher.verify("password", ""));
    }

    #[test]
    fn test_hasher_for_policy() {
        let plaintext = hasher_for(PasswordStorage::Plaintext);
        assert_eq!(plaintext.hash("x").unwrap(), "x");

        let argon2 = hasher_for(PasswordStorage::Argon2);
        assert!(argon2.hash("x").unwrap().starts_with("$argon2"));
    }
}
