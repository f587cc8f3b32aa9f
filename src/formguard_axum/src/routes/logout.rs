//! Axum-specific logout route.

use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use formguard_application::LogoutUseCase;
use formguard_core::{AuthResponseHelpers, FormAuthenticator};

use super::error::FormLoginApiError;
use crate::{adapters::response_builder, state::LoginState};

/// Log out, destroy the session and go back to the login form.
///
/// Mount for POST only, so a cross-site link or image cannot end a session.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<A>(
    State(state): State<LoginState<A>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, FormLoginApiError>
where
    A: FormAuthenticator,
{
    let (id, mut session) = state.load_session(&jar);

    let login_form_url = LogoutUseCase::new(state.authenticator()).execute(&mut session)?;

    let jar = state.end_session(jar, id);
    Ok((jar, response_builder().see_other(&login_form_url)))
}
