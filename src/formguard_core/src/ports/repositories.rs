use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{user::UserRecord, username::Username};

// UserProvider port trait and errors
#[derive(Debug, Error)]
pub enum UserProviderError {
    #[error("User not found")]
    UserNotFound,
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserProviderError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Maps a username to a user record, or reports that none exists.
#[async_trait]
pub trait UserProvider: Send + Sync {
    type User: UserRecord + Clone + 'static;

    async fn load_user_by_username(
        &self,
        username: &Username,
    ) -> Result<Self::User, UserProviderError>;
}
