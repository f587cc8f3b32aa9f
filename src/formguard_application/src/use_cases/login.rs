use formguard_core::{
    AuthenticationError, AuthenticationFailure, AuthenticationOutcome, FormAuthenticator,
    LoginRequest, SessionBag, UserRecord, Username, session_keys,
};

/// What the host should do after a login submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFlow {
    /// Not a login submission; let other handlers process the request
    NotApplicable,
    /// The user is logged in, redirect to `redirect_to`
    Authenticated {
        username: Username,
        redirect_to: String,
    },
    /// The attempt failed, redirect back to the login form
    Rejected {
        failure: AuthenticationFailure,
        redirect_to: String,
    },
}

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Authenticator error: {0}")]
    Authenticator(#[from] AuthenticationError),
    #[error("Route error: {0}")]
    Route(#[from] formguard_core::RouteError),
}

/// Login use case - runs a form authenticator over one request
pub struct FormLoginUseCase<A>
where
    A: FormAuthenticator,
{
    authenticator: A,
}

impl<A> FormLoginUseCase<A>
where
    A: FormAuthenticator,
{
    pub fn new(authenticator: A) -> Self {
        Self { authenticator }
    }

    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }

    /// Execute the login use case
    ///
    /// Runs extraction, user resolution and validation in order, stopping at
    /// the first failure. Failures are recorded in the session for the login
    /// form and turned into [`LoginFlow::Rejected`]; only configuration and
    /// collaborator errors come back as `Err`.
    #[tracing::instrument(name = "FormLoginUseCase::execute", skip_all)]
    pub async fn execute<R>(&self, request: &mut R) -> Result<LoginFlow, LoginError>
    where
        R: LoginRequest + Send,
    {
        let Some(attempt) = self.authenticator.extract_credentials(request)? else {
            return Ok(LoginFlow::NotApplicable);
        };

        let failure = match self.authenticator.resolve_user(&attempt).await {
            Ok(user) => match self.authenticator.validate(&attempt, &user).await {
                AuthenticationOutcome::Success => {
                    return self.on_success(request.session_mut(), &user);
                }
                AuthenticationOutcome::Failure(failure) => failure,
            },
            Err(AuthenticationError::Failure(failure)) => failure,
            Err(e) => return Err(e.into()),
        };

        self.on_failure(request.session_mut(), failure)
    }

    fn on_success<S: SessionBag>(
        &self,
        session: &mut S,
        user: &A::User,
    ) -> Result<LoginFlow, LoginError> {
        let redirect_to = match session.remove(session_keys::TARGET_PATH) {
            Some(target) => target,
            None => self.authenticator.post_login_success_url()?,
        };

        session.insert(
            session_keys::AUTHENTICATED_USER,
            user.username().to_string(),
        );
        session.remove(session_keys::LAST_ERROR);

        tracing::info!(username = %user.username(), "Login succeeded");

        Ok(LoginFlow::Authenticated {
            username: user.username().clone(),
            redirect_to,
        })
    }

    fn on_failure<S: SessionBag>(
        &self,
        session: &mut S,
        failure: AuthenticationFailure,
    ) -> Result<LoginFlow, LoginError> {
        let redirect_to = self.authenticator.login_form_url()?;

        session.insert(session_keys::LAST_ERROR, failure.user_message());

        tracing::info!(reason = %failure, "Login rejected");

        Ok(LoginFlow::Rejected {
            failure,
            redirect_to,
        })
    }
}
