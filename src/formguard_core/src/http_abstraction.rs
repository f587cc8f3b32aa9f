//! Zero-cost HTTP abstraction traits for form login.
//!
//! The login flow never sees a framework type. Framework crates wrap their
//! request data in newtypes and implement these traits on them:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  formguard_core: LoginRequest,           │
//! │  SessionBag, AuthResponseBuilder         │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  formguard_axum: AxumLoginRequest,       │
//! │  AxumResponseBuilder                     │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  FormAuthenticator / FormLoginUseCase    │
//! │  (generic over the framework)            │
//! └──────────────────────────────────────────┘
//! ```

/// Well-known session keys shared by the authenticator, the use cases and
/// the login form.
pub mod session_keys {
    /// Username of the most recent login submission, used to repopulate the form.
    pub const LAST_USERNAME: &str = "_security.last_username";
    /// User-facing message of the most recent authentication failure.
    pub const LAST_ERROR: &str = "_security.last_error";
    /// Username of the currently authenticated user.
    pub const AUTHENTICATED_USER: &str = "_security.authenticated_user";
    /// Page an anonymous visitor asked for before being sent to the login form.
    pub const TARGET_PATH: &str = "_security.main.target_path";
}

/// Mutable key/value storage scoped to one visitor.
///
/// Owned by the current request while it is being handled; never shared
/// between concurrent requests.
pub trait SessionBag {
    fn get(&self, key: &str) -> Option<&str>;

    fn insert(&mut self, key: &str, value: String);

    fn remove(&mut self, key: &str) -> Option<String>;
}

/// An inbound request as seen by a form authenticator.
pub trait LoginRequest {
    type Session: SessionBag;

    /// The request path, without query string.
    fn path(&self) -> &str;

    /// A decoded `application/x-www-form-urlencoded` field.
    fn form_field(&self, name: &str) -> Option<&str>;

    fn session_mut(&mut self) -> &mut Self::Session;
}

/// Trait for building HTTP responses for the login flow.
///
/// ```ignore
/// builder
///     .status(303)
///     .header("location", "/admin")
///     .build()
/// ```
pub trait AuthResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header
    fn header(self, name: &str, value: &str) -> Self;

    /// Add a Set-Cookie header
    ///
    /// The cookie_value should be a complete cookie string like:
    /// `"formguard_session=...; HttpOnly; SameSite=Lax; Path=/"`
    fn cookie(self, cookie_value: &str) -> Self {
        self.header("set-cookie", cookie_value)
    }

    /// Set an HTML body with a matching Content-Type header
    fn html_body(self, body: String) -> Self;

    /// Build the final response
    fn build(self) -> Self::Response;
}

/// Helper methods for the responses the login flow produces.
///
/// Automatically implemented for all types that implement `AuthResponseBuilder`.
pub trait AuthResponseHelpers: AuthResponseBuilder {
    /// 303 See Other, so the browser follows up with a GET
    fn see_other(self, location: &str) -> Self::Response {
        self.status(303).header("location", location).build()
    }

    /// 200 OK with an HTML page
    fn ok_html(self, body: String) -> Self::Response {
        self.status(200).html_body(body).build()
    }

    /// 404 Not Found with an empty body
    fn not_found(self) -> Self::Response {
        self.status(404).build()
    }
}

// Blanket implementation for all AuthResponseBuilder types
impl<T: AuthResponseBuilder> AuthResponseHelpers for T {}
