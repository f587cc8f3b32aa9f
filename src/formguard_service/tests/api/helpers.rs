use formguard_adapters::{
    Argon2PasswordVerifier, DashMapSessionStore, FixedRandomSource, HashMapUserProvider,
    LoginFormAuthenticator, PasswordEncoder, PlaintextPasswordVerifier,
    config::{FormGuardSettings, test},
};
use formguard_axum::{LoginState, state::LoginPaths};
use formguard_core::{Password, StoredUser, Username};
use formguard_service::LoginService;
use reqwest::{Response, redirect::Policy};
use tokio::net::TcpListener;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "formguard_session";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    /// Shared handle on the server's session store.
    pub sessions: DashMapSessionStore,
}

impl TestApp {
    /// Start a server on a random port with plaintext passwords. `draw` fixes
    /// the login coin flip: `2` lets valid logins through, `1` rejects them.
    pub async fn spawn(draw: u32) -> Self {
        Self::spawn_with_encoder(
            draw,
            PasswordEncoder::Plaintext(PlaintextPasswordVerifier::new()),
        )
        .await
    }

    /// Same as [`TestApp::spawn`], with alice's password stored as an Argon2id
    /// hash.
    pub async fn spawn_with_argon2(draw: u32) -> Self {
        Self::spawn_with_encoder(draw, PasswordEncoder::Argon2(Argon2PasswordVerifier::new()))
            .await
    }

    async fn spawn_with_encoder(draw: u32, encoder: PasswordEncoder) -> Self {
        let mut settings = FormGuardSettings::defaults().expect("default settings");
        settings.server.address = test::SERVER_ADDRESS.to_string();

        let provider = HashMapUserProvider::new();
        let hash = encoder
            .encode(&Password::from("wonderland"))
            .await
            .expect("encode password");
        provider
            .add_user(StoredUser::new(
                Username::from("alice"),
                hash,
                vec!["ROLE_ADMIN".to_string()],
            ))
            .await
            .expect("seed user");

        let authenticator = LoginFormAuthenticator::new(
            provider,
            encoder,
            settings.routes.path_resolver(),
            FixedRandomSource(draw),
            settings.routes.route_names(),
        );

        let sessions = DashMapSessionStore::new();
        let state = LoginState::new(
            authenticator,
            sessions.clone(),
            LoginPaths {
                login_check: settings.routes.login_check.path.clone(),
                logout: settings.routes.logout.path.clone(),
                session_cookie: settings.session.cookie_name.clone(),
            },
        );

        let listener = TcpListener::bind(&settings.server.address)
            .await
            .expect("bind test listener");
        let address = format!("http://{}", listener.local_addr().expect("local addr"));

        let service = LoginService::new(state, &settings.routes);
        tokio::spawn(service.run_standalone(listener));

        let http_client = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .expect("http client");

        Self {
            address,
            http_client,
            sessions,
        }
    }

    pub async fn get(&self, path: &str) -> Response {
        self.http_client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post(&self, path: &str) -> Response {
        self.http_client
            .post(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login(&self, username: &str, password: &str, consent: bool) -> Response {
        let mut form = vec![("_username", username), ("_password", password)];
        if consent {
            form.push(("_condiciones", "1"));
        }

        self.http_client
            .post(format!("{}/login_check", self.address))
            .form(&form)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// GET `path` from a fresh client carrying only the given session id.
    pub async fn get_with_session(&self, path: &str, session_id: Uuid) -> Response {
        reqwest::Client::builder()
            .redirect(Policy::none())
            .build()
            .expect("http client")
            .get(format!("{}{}", self.address, path))
            .header("cookie", format!("{SESSION_COOKIE}={session_id}"))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Fetch the login form and return its HTML.
    pub async fn login_page(&self) -> String {
        let response = self.get("/login").await;
        assert_eq!(response.status().as_u16(), 200);
        response.text().await.expect("login page body")
    }
}

pub fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get("location")
        .and_then(|value| value.to_str().ok())
}

/// The session id the response sets, if any. A removal cookie has an empty
/// value and yields `None`.
pub fn session_cookie(response: &Response) -> Option<Uuid> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.strip_prefix(&format!("{SESSION_COOKIE}=")))
        .filter_map(|rest| rest.split(';').next())
        .find_map(|id| Uuid::parse_str(id).ok())
}
