use std::sync::Arc;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use formguard_adapters::{DashMapSessionStore, MemorySession};
use formguard_application::FormLoginUseCase;
use formguard_core::FormAuthenticator;
use uuid::Uuid;

/// Shared state of the login routes.
pub struct LoginState<A>
where
    A: FormAuthenticator,
{
    pub use_case: Arc<FormLoginUseCase<A>>,
    pub sessions: DashMapSessionStore,
    pub paths: Arc<LoginPaths>,
}

/// Concrete paths the rendered pages link to.
#[derive(Debug, Clone)]
pub struct LoginPaths {
    pub login_check: String,
    pub logout: String,
    pub session_cookie: String,
}

impl<A> Clone for LoginState<A>
where
    A: FormAuthenticator,
{
    fn clone(&self) -> Self {
        Self {
            use_case: Arc::clone(&self.use_case),
            sessions: self.sessions.clone(),
            paths: Arc::clone(&self.paths),
        }
    }
}

impl<A> LoginState<A>
where
    A: FormAuthenticator,
{
    pub fn new(authenticator: A, sessions: DashMapSessionStore, paths: LoginPaths) -> Self {
        Self {
            use_case: Arc::new(FormLoginUseCase::new(authenticator)),
            sessions,
            paths: Arc::new(paths),
        }
    }

    pub fn authenticator(&self) -> &A {
        self.use_case.authenticator()
    }

    /// Check out the visitor's session, starting a new one if the cookie is
    /// missing, malformed or stale.
    pub fn load_session(&self, jar: &CookieJar) -> (Uuid, MemorySession) {
        let id = jar
            .get(&self.paths.session_cookie)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());
        self.sessions.load(id)
    }

    /// Write the session back and make sure the browser carries its id. A
    /// session with nothing in it is not kept and gets no cookie.
    pub fn save_session(&self, jar: CookieJar, id: Uuid, session: MemorySession) -> CookieJar {
        if self.sessions.save(id, session) {
            jar.add(
                Cookie::build((self.paths.session_cookie.clone(), id.to_string()))
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax)
                    .build(),
            )
        } else if jar.get(&self.paths.session_cookie).is_some() {
            self.clear_cookie(jar)
        } else {
            jar
        }
    }

    /// Move the session to a fresh id, so an id handed out before login never
    /// becomes an authenticated one.
    pub fn renew_session(&self, jar: CookieJar, old_id: Uuid, session: MemorySession) -> CookieJar {
        self.sessions.remove(&old_id);
        self.save_session(jar, Uuid::new_v4(), session)
    }

    /// Destroy the session and clear its cookie.
    pub fn end_session(&self, jar: CookieJar, id: Uuid) -> CookieJar {
        self.sessions.remove(&id);
        self.clear_cookie(jar)
    }

    fn clear_cookie(&self, jar: CookieJar) -> CookieJar {
        jar.remove(Cookie::build(self.paths.session_cookie.clone()).path("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formguard_adapters::{
        FixedRandomSource, HashMapUserProvider, LoginFormAuthenticator,
        PlaintextPasswordVerifier, RouteNames, StaticPathResolver,
    };
    use formguard_core::{SessionBag, session_keys};

    type TestAuthenticator = LoginFormAuthenticator<
        HashMapUserProvider,
        PlaintextPasswordVerifier,
        StaticPathResolver,
        FixedRandomSource,
    >;

    const COOKIE: &str = "formguard_session";

    fn state() -> LoginState<TestAuthenticator> {
        let authenticator = LoginFormAuthenticator::new(
            HashMapUserProvider::new(),
            PlaintextPasswordVerifier::new(),
            StaticPathResolver::default(),
            FixedRandomSource(2),
            RouteNames::default(),
        );
        LoginState::new(
            authenticator,
            DashMapSessionStore::new(),
            LoginPaths {
                login_check: "/login_check".to_string(),
                logout: "/logout".to_string(),
                session_cookie: COOKIE.to_string(),
            },
        )
    }

    fn cookie_id(jar: &CookieJar) -> Option<Uuid> {
        jar.get(COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
    }

    fn signed_in() -> MemorySession {
        let mut session = MemorySession::new();
        session.insert(session_keys::AUTHENTICATED_USER, "alice".to_string());
        session
    }

    #[test]
    fn empty_session_gets_no_cookie() {
        let state = state();
        let jar = CookieJar::new();
        let (id, session) = state.load_session(&jar);

        let jar = state.save_session(jar, id, session);

        assert!(jar.get(COOKIE).is_none());
        assert!(state.sessions.is_empty());
    }

    #[test]
    fn non_empty_session_is_stored_under_its_cookie() {
        let state = state();
        let (id, _) = state.load_session(&CookieJar::new());

        let jar = state.save_session(CookieJar::new(), id, signed_in());

        assert_eq!(cookie_id(&jar), Some(id));
        assert_eq!(state.load_session(&jar).0, id);
    }

    #[test]
    fn renewed_session_moves_to_a_new_id() {
        let state = state();
        let (old_id, _) = state.load_session(&CookieJar::new());
        let jar = state.save_session(CookieJar::new(), old_id, signed_in());

        let (id, session) = state.load_session(&jar);
        let jar = state.renew_session(jar, id, session);

        let new_id = cookie_id(&jar).unwrap();
        assert_ne!(new_id, old_id);
        assert_eq!(state.sessions.len(), 1);
        assert_eq!(
            state.sessions.load(Some(new_id)).1.get(session_keys::AUTHENTICATED_USER),
            Some("alice")
        );
        assert_ne!(state.sessions.load(Some(old_id)).0, old_id);
    }
}
