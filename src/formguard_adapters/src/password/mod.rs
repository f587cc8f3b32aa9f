//! Password verification and hashing.

pub mod argon2_verifier;
pub mod plaintext_verifier;

use async_trait::async_trait;
use formguard_core::{Password, PasswordVerifier, UserRecord};
use secrecy::Secret;
use thiserror::Error;

pub use argon2_verifier::Argon2PasswordVerifier;
pub use plaintext_verifier::PlaintextPasswordVerifier;

#[derive(Debug, Error)]
#[error("Failed to hash password: {0}")]
pub struct PasswordHashError(pub String);

/// The encoding selected in configuration.
///
/// Hashes passwords when users are seeded and verifies them at login.
#[derive(Debug, Clone)]
pub enum PasswordEncoder {
    Argon2(Argon2PasswordVerifier),
    Plaintext(PlaintextPasswordVerifier),
}

impl PasswordEncoder {
    /// Turn a plaintext password into the stored representation.
    pub async fn encode(&self, password: &Password) -> Result<Secret<String>, PasswordHashError> {
        match self {
            Self::Argon2(verifier) => verifier.hash_password(password).await,
            Self::Plaintext(verifier) => Ok(verifier.encode(password)),
        }
    }
}

#[async_trait]
impl PasswordVerifier for PasswordEncoder {
    async fn is_password_valid<U>(&self, user: &U, candidate: &Password) -> bool
    where
        U: UserRecord,
    {
        match self {
            Self::Argon2(verifier) => verifier.is_password_valid(user, candidate).await,
            Self::Plaintext(verifier) => verifier.is_password_valid(user, candidate).await,
        }
    }

    async fn verify_without_user(&self, candidate: &Password) {
        match self {
            Self::Argon2(verifier) => verifier.verify_without_user(candidate).await,
            Self::Plaintext(verifier) => verifier.verify_without_user(candidate).await,
        }
    }
}
