//! Infrastructure adapters for the form login flow: the concrete
//! authenticator, its collaborators, session storage and configuration.

pub mod authentication;
pub mod config;
pub mod http;
pub mod password;
pub mod persistence;
pub mod random;
pub mod routing;
pub mod session;

pub use authentication::{LoginFormAuthenticator, RouteNames};
pub use password::{
    Argon2PasswordVerifier, PasswordEncoder, PasswordHashError, PlaintextPasswordVerifier,
};
pub use persistence::HashMapUserProvider;
pub use random::{ConfiguredRandomSource, FixedRandomSource, SeededRandomSource, ThreadRandomSource};
pub use routing::StaticPathResolver;
pub use session::{DashMapSessionStore, MemorySession};
