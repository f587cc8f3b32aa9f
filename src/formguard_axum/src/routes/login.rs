//! Axum-specific login check route.

use std::collections::HashMap;

use axum::{
    Form,
    extract::State,
    http::Uri,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use formguard_application::LoginFlow;
use formguard_core::{AuthResponseHelpers, FormAuthenticator};

use super::error::FormLoginApiError;
use crate::{
    adapters::{AxumLoginRequest, response_builder},
    state::LoginState,
};

/// Axum login check route.
///
/// Runs the login use case over the submitted form and redirects: to the
/// target page on success, back to the login form on failure. A successful
/// login always continues under a new session id.
#[tracing::instrument(name = "LoginCheck", skip_all)]
pub async fn login_check<A>(
    State(state): State<LoginState<A>>,
    jar: CookieJar,
    uri: Uri,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<impl IntoResponse, FormLoginApiError>
where
    A: FormAuthenticator,
{
    let (id, mut session) = state.load_session(&jar);

    let flow = {
        let mut request = AxumLoginRequest::new(uri, fields, &mut session);
        state.use_case.execute(&mut request).await
    };
    let jar = match flow {
        Ok(LoginFlow::Authenticated { .. }) => state.renew_session(jar, id, session),
        _ => state.save_session(jar, id, session),
    };

    let response = match flow? {
        LoginFlow::NotApplicable => response_builder().not_found(),
        LoginFlow::Authenticated { redirect_to, .. } | LoginFlow::Rejected { redirect_to, .. } => {
            response_builder().see_other(&redirect_to)
        }
    };

    Ok((jar, response))
}
