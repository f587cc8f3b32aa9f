use async_trait::async_trait;

use crate::{
    domain::{
        failure::{AuthenticationError, AuthenticationOutcome},
        login_attempt::LoginAttempt,
        user::UserRecord,
    },
    http_abstraction::LoginRequest,
    ports::services::RouteError,
};

// ============================================================================
// Form Login Authenticator Trait
// ============================================================================

/// Capability interface of a form login authenticator.
///
/// A host pipeline calls the three steps in order and stops at the first
/// failure:
///
/// 1. [`extract_credentials`](Self::extract_credentials): `None` means the
///    request is not a login submission and other handlers should see it.
/// 2. [`resolve_user`](Self::resolve_user): look up the identity behind the
///    submitted username.
/// 3. [`validate`](Self::validate): check the password and everything else
///    the scheme requires.
///
/// Implementations hold only immutable collaborators, so one instance can be
/// shared by every request.
#[async_trait]
pub trait FormAuthenticator: Send + Sync + 'static {
    /// The identity type produced by the user lookup
    type User: UserRecord + Clone + 'static;

    /// Pull the credentials out of a login form submission.
    ///
    /// Records the submitted username in the session as a side effect so the
    /// form can be repopulated after a failure.
    fn extract_credentials<R>(
        &self,
        request: &mut R,
    ) -> Result<Option<LoginAttempt>, AuthenticationError>
    where
        R: LoginRequest;

    /// Find the user the attempt claims to be.
    async fn resolve_user(&self, attempt: &LoginAttempt)
    -> Result<Self::User, AuthenticationError>;

    /// Check the attempt against the resolved user.
    async fn validate(&self, attempt: &LoginAttempt, user: &Self::User) -> AuthenticationOutcome;

    /// Where the login form is displayed.
    fn login_form_url(&self) -> Result<String, RouteError>;

    /// Where to send the user after a successful login.
    fn post_login_success_url(&self) -> Result<String, RouteError>;
}
