use async_trait::async_trait;
use formguard_core::{
    AuthenticationError, AuthenticationFailure, AuthenticationOutcome, CONSENT_FIELD,
    FormAuthenticator, LoginAttempt, LoginRequest, PASSWORD_FIELD, PasswordVerifier, PathResolver,
    RandomSource, RouteError, SessionBag, USERNAME_FIELD, UserProvider, UserProviderError,
    session_keys,
};

// ============================================================================
// Login Form Authenticator
// ============================================================================

/// Logical names of the routes the authenticator needs, resolved through the
/// injected [`PathResolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNames {
    /// The route the login form posts to
    pub login_check: String,
    /// The route that displays the login form
    pub login_form: String,
    /// Where to go after a successful login
    pub default_success: String,
}

impl Default for RouteNames {
    fn default() -> Self {
        Self {
            login_check: "login_check_route".to_string(),
            login_form: "login_route".to_string(),
            default_success: "admin".to_string(),
        }
    }
}

/// Username/password form login with a mandatory terms checkbox.
///
/// This authenticator:
/// - Only handles submissions to the login-check route
/// - Looks the user up through the injected [`UserProvider`]
/// - Checks the password with the injected [`PasswordVerifier`]
/// - Refuses logins whose terms checkbox was left unticked
/// - Rejects half of all otherwise valid logins at random
///
/// The last rule is a demonstration artifact. Inject a
/// [`FixedRandomSource`](crate::random::FixedRandomSource) of `2` to turn it
/// off; do not ship it to production with a real random source.
#[derive(Clone)]
pub struct LoginFormAuthenticator<U, V, P, G> {
    user_provider: U,
    password_verifier: V,
    path_resolver: P,
    random_source: G,
    routes: RouteNames,
}

impl<U, V, P, G> LoginFormAuthenticator<U, V, P, G>
where
    U: UserProvider,
    V: PasswordVerifier,
    P: PathResolver,
    G: RandomSource,
{
    pub fn new(
        user_provider: U,
        password_verifier: V,
        path_resolver: P,
        random_source: G,
        routes: RouteNames,
    ) -> Self {
        Self {
            user_provider,
            password_verifier,
            path_resolver,
            random_source,
            routes,
        }
    }

    /// Get a reference to the user provider
    pub fn user_provider(&self) -> &U {
        &self.user_provider
    }

    pub fn routes(&self) -> &RouteNames {
        &self.routes
    }

    /// The path login forms must post to.
    pub fn login_check_url(&self) -> Result<String, RouteError> {
        self.path_resolver.generate(&self.routes.login_check)
    }
}

#[async_trait]
impl<U, V, P, G> FormAuthenticator for LoginFormAuthenticator<U, V, P, G>
where
    U: UserProvider + 'static,
    V: PasswordVerifier + 'static,
    P: PathResolver + 'static,
    G: RandomSource + 'static,
{
    type User = U::User;

    #[tracing::instrument(
        name = "LoginFormAuthenticator::extract_credentials",
        skip_all,
        fields(path = %request.path())
    )]
    fn extract_credentials<R>(
        &self,
        request: &mut R,
    ) -> Result<Option<LoginAttempt>, AuthenticationError>
    where
        R: LoginRequest,
    {
        let login_check_path = self.login_check_url()?;
        if request.path() != login_check_path {
            return Ok(None);
        }

        let attempt = LoginAttempt::from_form(
            request.form_field(USERNAME_FIELD),
            request.form_field(PASSWORD_FIELD),
            request.form_field(CONSENT_FIELD),
        );

        request
            .session_mut()
            .insert(session_keys::LAST_USERNAME, attempt.username().to_string());

        Ok(Some(attempt))
    }

    #[tracing::instrument(
        name = "LoginFormAuthenticator::resolve_user",
        skip_all,
        fields(username = %attempt.username())
    )]
    async fn resolve_user(
        &self,
        attempt: &LoginAttempt,
    ) -> Result<Self::User, AuthenticationError> {
        match self
            .user_provider
            .load_user_by_username(attempt.username())
            .await
        {
            Ok(user) => Ok(user),
            Err(UserProviderError::UserNotFound) => {
                self.password_verifier
                    .verify_without_user(attempt.password())
                    .await;
                Err(AuthenticationFailure::UnknownUser.into())
            }
            Err(e) => Err(AuthenticationError::Unexpected(e.to_string())),
        }
    }

    #[tracing::instrument(
        name = "LoginFormAuthenticator::validate",
        skip_all,
        fields(username = %attempt.username())
    )]
    async fn validate(&self, attempt: &LoginAttempt, user: &Self::User) -> AuthenticationOutcome {
        if !self
            .password_verifier
            .is_password_valid(user, attempt.password())
            .await
        {
            return AuthenticationOutcome::Failure(AuthenticationFailure::BadCredentials);
        }

        if !attempt.consent_accepted() {
            return AuthenticationOutcome::Failure(AuthenticationFailure::ConsentRequired {
                username: attempt.username().clone(),
            });
        }

        // Coin flip: only a draw of 2 lets the user in.
        if self.random_source.draw(1, 2) != 2 {
            tracing::info!("Valid login rejected by random draw");
            return AuthenticationOutcome::Failure(AuthenticationFailure::RandomRejection);
        }

        AuthenticationOutcome::Success
    }

    fn login_form_url(&self) -> Result<String, RouteError> {
        self.path_resolver.generate(&self.routes.login_form)
    }

    fn post_login_success_url(&self) -> Result<String, RouteError> {
        self.path_resolver.generate(&self.routes.default_success)
    }
}
