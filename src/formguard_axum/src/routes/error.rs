use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use formguard_application::LoginError;
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors the login routes cannot turn into a redirect.
///
/// Authentication failures never end up here; they redirect back to the
/// login form.
#[derive(Debug, Error)]
pub enum FormLoginApiError {
    #[error("Login configuration error: {0}")]
    Login(#[from] LoginError),

    #[error("Failed to render page: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for FormLoginApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Login route failed");

        let body = Json(ErrorResponse {
            error: "Internal server error".to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
