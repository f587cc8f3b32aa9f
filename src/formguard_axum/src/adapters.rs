//! Axum framework adapters for the login flow.
//!
//! `AxumLoginRequest` and `AxumResponseBuilder` implement the `formguard_core`
//! HTTP traits for Axum types, keeping the authenticator and use cases free
//! of any framework dependency.

use std::collections::HashMap;

use axum::body::Body;
use axum::http::{Response, StatusCode, Uri};
use formguard_adapters::MemorySession;
use formguard_core::{AuthResponseBuilder, LoginRequest};

/// A decoded Axum form submission bound to the visitor's session.
///
/// The body has to be read before the authenticator runs, so this wraps the
/// already-extracted form fields rather than the raw request.
pub struct AxumLoginRequest<'s> {
    uri: Uri,
    form: HashMap<String, String>,
    session: &'s mut MemorySession,
}

impl<'s> AxumLoginRequest<'s> {
    pub fn new(uri: Uri, form: HashMap<String, String>, session: &'s mut MemorySession) -> Self {
        Self { uri, form, session }
    }
}

impl LoginRequest for AxumLoginRequest<'_> {
    type Session = MemorySession;

    fn path(&self) -> &str {
        self.uri.path()
    }

    fn form_field(&self, name: &str) -> Option<&str> {
        self.form.get(name).map(String::as_str)
    }

    fn session_mut(&mut self) -> &mut Self::Session {
        &mut *self.session
    }
}

/// Wrapper around Axum's response builder implementing
/// `formguard_core::AuthResponseBuilder`.
pub struct AxumResponseBuilder {
    builder: axum::http::response::Builder,
    body: Option<String>,
}

impl AxumResponseBuilder {
    /// Create a new Axum response builder
    pub fn new() -> Self {
        Self {
            builder: Response::builder(),
            body: None,
        }
    }
}

impl Default for AxumResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthResponseBuilder for AxumResponseBuilder {
    type Response = Response<Body>;

    fn status(mut self, code: u16) -> Self {
        self.builder = self.builder.status(code);
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    fn html_body(mut self, body: String) -> Self {
        self.builder = self.builder.header("content-type", "text/html; charset=utf-8");
        self.body = Some(body);
        self
    }

    fn build(self) -> Self::Response {
        let body = self.body.unwrap_or_default();
        self.builder.body(Body::from(body)).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Invalid response parts");
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        })
    }
}

/// Helper function to create an Axum response builder
///
/// ```ignore
/// use formguard_core::AuthResponseHelpers;
///
/// response_builder().see_other("/admin")
/// ```
pub fn response_builder() -> AxumResponseBuilder {
    AxumResponseBuilder::new()
}
