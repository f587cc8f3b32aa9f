//! Axum-specific protected landing page.

use askama::Template;
use axum::{extract::State, http::Uri, response::IntoResponse};
use axum_extra::extract::CookieJar;
use formguard_application::{EntryPointUseCase, session_state};
use formguard_core::{AuthResponseHelpers, FormAuthenticator};

use super::error::FormLoginApiError;
use crate::{adapters::response_builder, state::LoginState, templates::AdminPage};

/// Page shown after a successful login. Anonymous visitors are sent to the
/// login form and brought back here afterwards.
#[tracing::instrument(name = "Admin", skip_all)]
pub async fn admin<A>(
    State(state): State<LoginState<A>>,
    jar: CookieJar,
    uri: Uri,
) -> Result<impl IntoResponse, FormLoginApiError>
where
    A: FormAuthenticator,
{
    let (id, mut session) = state.load_session(&jar);

    let response = match session_state::authenticated_user(&session) {
        Some(username) => {
            let page = AdminPage {
                username: username.as_str(),
                logout: &state.paths.logout,
            }
            .render()?;
            response_builder().ok_html(page)
        }
        None => {
            let login_form_url =
                EntryPointUseCase::new(state.authenticator()).start(&mut session, uri.path())?;
            response_builder().see_other(&login_form_url)
        }
    };

    let jar = state.save_session(jar, id, session);
    Ok((jar, response))
}
