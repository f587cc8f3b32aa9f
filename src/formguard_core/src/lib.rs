pub mod domain;
pub mod http_abstraction;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    consent::ConsentFlag,
    failure::{
        AuthenticationError, AuthenticationFailure, AuthenticationOutcome, FailureKind,
        INVALID_CREDENTIALS_MESSAGE,
    },
    login_attempt::{CONSENT_FIELD, LoginAttempt, PASSWORD_FIELD, USERNAME_FIELD},
    password::Password,
    user::{StoredUser, UserRecord},
    username::Username,
};

pub use ports::{
    repositories::{UserProvider, UserProviderError},
    services::{PasswordVerifier, PathResolver, RandomSource, RouteError},
};

pub use strategies::authenticator::FormAuthenticator;

pub use http_abstraction::{
    AuthResponseBuilder, AuthResponseHelpers, LoginRequest, SessionBag, session_keys,
};
