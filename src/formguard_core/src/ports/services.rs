use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{password::Password, user::UserRecord};

/// Checks a plaintext candidate against the credential stored on a user.
#[async_trait]
pub trait PasswordVerifier: Send + Sync {
    /// Returns `false` both for a mismatch and for a stored credential that
    /// cannot be parsed.
    async fn is_password_valid<U>(&self, user: &U, candidate: &Password) -> bool
    where
        U: UserRecord;

    /// Spend the work of one verification when there is no user to check
    /// against, so a missing account is rejected as slowly as a wrong
    /// password. Verifiers with negligible cost can keep the default.
    async fn verify_without_user(&self, _candidate: &Password) {}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

/// Maps logical route names to concrete paths.
pub trait PathResolver: Send + Sync {
    fn generate(&self, route_name: &str) -> Result<String, RouteError>;
}

/// Source of uniformly distributed integers.
pub trait RandomSource: Send + Sync {
    /// Draw a value from the inclusive range `low..=high`.
    fn draw(&self, low: u32, high: u32) -> u32;
}
