use axum::{
    Router,
    routing::{get, post},
};
use formguard_adapters::config::RouteSettings;
use formguard_axum::{
    LoginState,
    routes::{admin, login_check, login_form, logout},
};
use formguard_core::FormAuthenticator;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// Form login service: login form, login check, a protected landing page and
/// logout
pub struct LoginService {
    router: Router,
}

impl LoginService {
    /// Create a new LoginService mounting each route at its configured path
    ///
    /// # Arguments
    /// * `state` - Authenticator, session store and page links
    /// * `routes` - Configured route paths
    pub fn new<A>(state: LoginState<A>, routes: &RouteSettings) -> Self
    where
        A: FormAuthenticator,
    {
        let router = Router::new()
            .route(&routes.login_form.path, get(login_form::<A>))
            .route(&routes.login_check.path, post(login_check::<A>))
            .route(&routes.default_success.path, get(admin::<A>))
            .route(&routes.logout.path, post(logout::<A>))
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the LoginService into a router that can be nested into
    /// another application
    pub fn into_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the login service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("Login service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
