use formguard_core::{FormAuthenticator, SessionBag, session_keys};

use super::login::LoginError;

/// Entry point use case - sends anonymous visitors of a protected page to
/// the login form, remembering where they wanted to go
pub struct EntryPointUseCase<'a, A>
where
    A: FormAuthenticator,
{
    authenticator: &'a A,
}

impl<'a, A> EntryPointUseCase<'a, A>
where
    A: FormAuthenticator,
{
    pub fn new(authenticator: &'a A) -> Self {
        Self { authenticator }
    }

    /// Returns the login form URL to redirect to.
    ///
    /// The requested path is stored as the post-login target unless it is
    /// the login form itself.
    #[tracing::instrument(name = "EntryPointUseCase::start", skip(self, session))]
    pub fn start<S: SessionBag>(
        &self,
        session: &mut S,
        requested_path: &str,
    ) -> Result<String, LoginError> {
        let login_form_url = self.authenticator.login_form_url()?;

        if requested_path != login_form_url {
            session.insert(session_keys::TARGET_PATH, requested_path.to_string());
        }

        Ok(login_form_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::login::tests::{MockAuthenticator, MockSession};

    #[test]
    fn test_start_remembers_the_requested_page() {
        let authenticator = MockAuthenticator::lucky();
        let mut session = MockSession::default();

        let redirect = EntryPointUseCase::new(&authenticator)
            .start(&mut session, "/admin/reports")
            .unwrap();

        assert_eq!(redirect, "/login");
        assert_eq!(
            session.get(session_keys::TARGET_PATH),
            Some("/admin/reports")
        );
    }

    #[test]
    fn test_start_does_not_target_the_login_form() {
        let authenticator = MockAuthenticator::lucky();
        let mut session = MockSession::default();

        EntryPointUseCase::new(&authenticator)
            .start(&mut session, "/login")
            .unwrap();

        assert_eq!(session.get(session_keys::TARGET_PATH), None);
    }
}
