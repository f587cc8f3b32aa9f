//! Axum integration for the formguard form login library.
//!
//! This crate provides Axum adapters for the framework-agnostic login flow
//! defined in `formguard_core` and `formguard_application`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  formguard_core: HTTP trait definitions  │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  formguard_axum: Axum implementations    │
//! │  - AxumLoginRequest                      │
//! │  - AxumResponseBuilder                   │
//! │  - Session cookie handling               │
//! │  - Axum route handlers                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use formguard_axum::{LoginState, routes};
//!
//! let app = Router::new()
//!     .route("/login", get(routes::login_form::<MyAuthenticator>))
//!     .route("/login_check", post(routes::login_check::<MyAuthenticator>))
//!     .with_state(state);
//! ```

pub mod adapters;
pub mod routes;
pub mod state;
pub mod templates;

// Re-export for convenience
pub use adapters::{AxumLoginRequest, AxumResponseBuilder, response_builder};
pub use state::LoginState;
