use secrecy::Secret;

use crate::domain::username::Username;

/// Capabilities the login flow needs from a resolved identity.
///
/// The record is owned by the user provider; the authenticator only borrows
/// it for the duration of one validation.
pub trait UserRecord: Send + Sync {
    fn username(&self) -> &Username;

    /// Stored credential representation (a hash, or plaintext for demo setups).
    fn password_hash(&self) -> &Secret<String>;

    fn roles(&self) -> &[String];
}

/// A user held by one of the bundled providers.
#[derive(Debug, Clone)]
pub struct StoredUser {
    username: Username,
    password_hash: Secret<String>,
    roles: Vec<String>,
}

impl StoredUser {
    pub fn new(username: Username, password_hash: Secret<String>, roles: Vec<String>) -> Self {
        Self {
            username,
            password_hash,
            roles,
        }
    }
}

impl UserRecord for StoredUser {
    fn username(&self) -> &Username {
        &self.username
    }

    fn password_hash(&self) -> &Secret<String> {
        &self.password_hash
    }

    fn roles(&self) -> &[String] {
        &self.roles
    }
}
