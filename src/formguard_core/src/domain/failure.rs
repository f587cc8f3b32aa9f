use thiserror::Error;

use crate::domain::username::Username;
use crate::ports::services::RouteError;

/// Text shown for both unknown users and wrong passwords, so the two cannot
/// be told apart from the outside.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials.";

/// Why a login attempt was refused.
///
/// Every variant is recoverable: the host pipeline turns it into a redirect
/// back to the login form with a flash message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthenticationFailure {
    #[error("User not found")]
    UnknownUser,
    #[error("Bad credentials")]
    BadCredentials,
    #[error("Terms not accepted by {username}")]
    ConsentRequired { username: Username },
    /// Coin-flip rejection of otherwise valid logins. Demonstration behaviour,
    /// never enable this in a real deployment.
    #[error("Random rejection")]
    RandomRejection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    UnknownUser,
    BadCredentials,
    ConsentRequired,
    RandomRejection,
}

impl AuthenticationFailure {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::UnknownUser => FailureKind::UnknownUser,
            Self::BadCredentials => FailureKind::BadCredentials,
            Self::ConsentRequired { .. } => FailureKind::ConsentRequired,
            Self::RandomRejection => FailureKind::RandomRejection,
        }
    }

    /// The message safe to display to the person at the keyboard.
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownUser | Self::BadCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
            Self::ConsentRequired { username } => {
                format!("Hey {}! No entry without accepting terms!", username)
            }
            Self::RandomRejection => "Bad luck! Try again!".to_string(),
        }
    }
}

/// Result of checking a login attempt against a resolved user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationOutcome {
    Success,
    Failure(AuthenticationFailure),
}

impl AuthenticationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Errors a form authenticator can surface to its caller.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    #[error("Authentication failed: {0}")]
    Failure(#[from] AuthenticationFailure),
    #[error("Route error: {0}")]
    Route(#[from] RouteError),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
