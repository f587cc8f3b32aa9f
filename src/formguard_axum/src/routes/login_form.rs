//! Axum-specific login form route.

use askama::Template;
use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use formguard_application::session_state;
use formguard_core::{AuthResponseHelpers, FormAuthenticator};

use super::error::FormLoginApiError;
use crate::{adapters::response_builder, state::LoginState, templates::LoginPage};

/// Show the login form, prefilled with the last username and the last error.
#[tracing::instrument(name = "LoginForm", skip_all)]
pub async fn login_form<A>(
    State(state): State<LoginState<A>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, FormLoginApiError>
where
    A: FormAuthenticator,
{
    let (id, mut session) = state.load_session(&jar);

    let error = session_state::take_last_authentication_error(&mut session);
    let page = LoginPage {
        action: &state.paths.login_check,
        last_username: session_state::last_username(&session).unwrap_or_default(),
        error,
    }
    .render()?;

    let jar = state.save_session(jar, id, session);
    Ok((jar, response_builder().ok_html(page)))
}
