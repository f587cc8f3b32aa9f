//! Axum-specific route handlers.
//!
//! These routes use Axum's extractors to get data from requests, call the
//! framework-agnostic use cases, and convert results to Axum responses.

pub mod admin;
pub mod error;
pub mod login;
pub mod login_form;
pub mod logout;

pub use admin::admin;
pub use error::FormLoginApiError;
pub use login::login_check;
pub use login_form::login_form;
pub use logout::logout;
