//! # formguard - Form Login Library
//!
//! Facade crate re-exporting the public APIs of the formguard components.
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Password`, `LoginAttempt`, `AuthenticationFailure`, etc.
//! - **Ports**: `UserProvider`, `PasswordVerifier`, `PathResolver`, `RandomSource`
//! - **Use cases**: `FormLoginUseCase`, `EntryPointUseCase`, `LogoutUseCase`
//! - **Adapters**: `LoginFormAuthenticator`, `HashMapUserProvider`, `DashMapSessionStore`, etc.
//! - **Service**: `LoginService`, the axum router serving the login pages

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types, ports and HTTP abstractions
pub mod core {
    pub use formguard_core::*;
}

pub use formguard_core::{
    AuthenticationError, AuthenticationFailure, AuthenticationOutcome, ConsentFlag,
    FailureKind, FormAuthenticator, LoginAttempt, Password, StoredUser, UserRecord, Username,
};

// ============================================================================
// Ports
// ============================================================================

pub use formguard_core::{
    PasswordVerifier, PathResolver, RandomSource, RouteError, UserProvider, UserProviderError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use formguard_application::*;
}

pub use formguard_application::{
    EntryPointUseCase, FormLoginUseCase, LoginError, LoginFlow, LogoutUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    pub use formguard_adapters::{
        authentication, config, http, password, persistence, random, routing, session,
    };

    /// Axum request, response and route adapters
    pub mod axum {
        pub use formguard_axum::*;
    }
}

pub use formguard_adapters::{
    Argon2PasswordVerifier, DashMapSessionStore, FixedRandomSource, HashMapUserProvider,
    LoginFormAuthenticator, PlaintextPasswordVerifier, SeededRandomSource, StaticPathResolver,
    ThreadRandomSource,
};

// ============================================================================
// Login Service (Main Entry Point)
// ============================================================================

pub use formguard_service::{LoginService, build_authenticator, build_service};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
