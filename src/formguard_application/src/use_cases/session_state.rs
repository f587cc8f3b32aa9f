//! Reading the authentication state a previous request left in the session.

use formguard_core::{SessionBag, Username, session_keys};

/// The username submitted last, for repopulating the login form.
pub fn last_username<S: SessionBag>(session: &S) -> Option<&str> {
    session.get(session_keys::LAST_USERNAME)
}

/// The message of the last authentication failure. Reading it clears it, so
/// it is shown only once.
pub fn take_last_authentication_error<S: SessionBag>(session: &mut S) -> Option<String> {
    session.remove(session_keys::LAST_ERROR)
}

/// The user this session is logged in as, if any.
pub fn authenticated_user<S: SessionBag>(session: &S) -> Option<Username> {
    session
        .get(session_keys::AUTHENTICATED_USER)
        .map(Username::from)
}
