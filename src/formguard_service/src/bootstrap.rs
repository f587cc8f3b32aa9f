//! Wiring the service from settings.

use formguard_adapters::{
    Argon2PasswordVerifier, ConfiguredRandomSource, DashMapSessionStore, HashMapUserProvider,
    LoginFormAuthenticator, PasswordEncoder, PasswordHashError, PlaintextPasswordVerifier,
    StaticPathResolver,
    config::{FormGuardSettings, PasswordEncoding, RouteSetting},
};
use formguard_axum::{LoginState, state::LoginPaths};
use formguard_core::{Password, StoredUser, UserProviderError, Username};
use thiserror::Error;

use crate::login_service::LoginService;

pub type ConfiguredAuthenticator = LoginFormAuthenticator<
    HashMapUserProvider,
    PasswordEncoder,
    StaticPathResolver,
    ConfiguredRandomSource,
>;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Route {name} has invalid path {path:?}: paths must start with '/'")]
    InvalidRoutePath { name: String, path: String },

    #[error("Failed to seed user: {0}")]
    PasswordHash(#[from] PasswordHashError),

    #[error("Failed to seed user: {0}")]
    UserProvider(#[from] UserProviderError),
}

/// Build the form authenticator with the configured users, password encoding
/// and random source.
#[tracing::instrument(name = "Building authenticator", skip_all)]
pub async fn build_authenticator(
    settings: &FormGuardSettings,
) -> Result<ConfiguredAuthenticator, BootstrapError> {
    let routes = &settings.routes;
    for route in [
        &routes.login_check,
        &routes.login_form,
        &routes.default_success,
        &routes.logout,
    ] {
        validate_route(route)?;
    }

    let encoder = match settings.security.password_encoding {
        PasswordEncoding::Argon2 => PasswordEncoder::Argon2(Argon2PasswordVerifier::new()),
        PasswordEncoding::Plaintext => PasswordEncoder::Plaintext(PlaintextPasswordVerifier::new()),
    };

    let provider = HashMapUserProvider::new();
    for user in &settings.users {
        let hash = encoder
            .encode(&Password::new(user.password.clone()))
            .await?;
        provider
            .add_user(StoredUser::new(
                Username::from(user.username.as_str()),
                hash,
                user.roles.clone(),
            ))
            .await?;
    }

    tracing::warn!("Valid logins are rejected at random half of the time (demo behaviour)");
    tracing::info!(users = settings.users.len(), "Authenticator ready");

    Ok(LoginFormAuthenticator::new(
        provider,
        encoder,
        routes.path_resolver(),
        ConfiguredRandomSource::from_seed(settings.security.random_seed),
        routes.route_names(),
    ))
}

/// Build the whole service: authenticator, session store and router.
///
/// Also starts the task that drops idle sessions, so this must run inside a
/// Tokio runtime.
pub async fn build_service(settings: &FormGuardSettings) -> Result<LoginService, BootstrapError> {
    let authenticator = build_authenticator(settings).await?;

    let sessions = DashMapSessionStore::with_idle_timeout(settings.session.idle_timeout());
    sessions.spawn_sweeper(settings.session.sweep_interval());

    let state = LoginState::new(
        authenticator,
        sessions,
        LoginPaths {
            login_check: settings.routes.login_check.path.clone(),
            logout: settings.routes.logout.path.clone(),
            session_cookie: settings.session.cookie_name.clone(),
        },
    );

    Ok(LoginService::new(state, &settings.routes))
}

fn validate_route(route: &RouteSetting) -> Result<(), BootstrapError> {
    if route.path.starts_with('/') {
        Ok(())
    } else {
        Err(BootstrapError::InvalidRoutePath {
            name: route.name.clone(),
            path: route.path.clone(),
        })
    }
}
