use formguard_core::{FormAuthenticator, SessionBag, session_keys};

use super::login::LoginError;

/// Logout use case - forgets the authenticated user
pub struct LogoutUseCase<'a, A>
where
    A: FormAuthenticator,
{
    authenticator: &'a A,
}

impl<'a, A> LogoutUseCase<'a, A>
where
    A: FormAuthenticator,
{
    pub fn new(authenticator: &'a A) -> Self {
        Self { authenticator }
    }

    /// Execute the logout use case
    ///
    /// # Returns
    /// The login form URL to redirect to
    #[tracing::instrument(name = "LogoutUseCase::execute", skip_all)]
    pub fn execute<S: SessionBag>(&self, session: &mut S) -> Result<String, LoginError> {
        if let Some(username) = session.remove(session_keys::AUTHENTICATED_USER) {
            tracing::info!(%username, "Logged out");
        }
        session.remove(session_keys::TARGET_PATH);
        session.remove(session_keys::LAST_ERROR);

        Ok(self.authenticator.login_form_url()?)
    }
}
