use async_trait::async_trait;
use formguard_core::{Password, PasswordVerifier, UserRecord};
use secrecy::{ExposeSecret, Secret};

/// Stores and compares passwords as-is.
///
/// Only meant for demo and test setups with in-memory users.
#[derive(Debug, Clone, Default)]
pub struct PlaintextPasswordVerifier;

impl PlaintextPasswordVerifier {
    pub fn new() -> Self {
        Self
    }

    pub fn encode(&self, password: &Password) -> Secret<String> {
        Secret::new(password.as_ref().expose_secret().clone())
    }
}

#[async_trait]
impl PasswordVerifier for PlaintextPasswordVerifier {
    async fn is_password_valid<U>(&self, user: &U, candidate: &Password) -> bool
    where
        U: UserRecord,
    {
        user.password_hash().expose_secret() == candidate.as_ref().expose_secret()
    }
}
