use secrecy::Secret;

use crate::domain::{consent::ConsentFlag, password::Password, username::Username};

/// Form field carrying the username.
pub const USERNAME_FIELD: &str = "_username";
/// Form field carrying the plaintext password.
pub const PASSWORD_FIELD: &str = "_password";
/// Form field carrying the terms-acceptance checkbox.
pub const CONSENT_FIELD: &str = "_condiciones";

/// Credentials extracted from a single login form submission.
///
/// Valid for exactly one validation pass. Never persisted.
#[derive(Debug, Clone)]
pub struct LoginAttempt {
    username: Username,
    password: Password,
    consent: ConsentFlag,
}

impl LoginAttempt {
    pub fn new(username: Username, password: Password, consent: ConsentFlag) -> Self {
        Self {
            username,
            password,
            consent,
        }
    }

    /// Build an attempt from raw form values. Missing fields become empty.
    pub fn from_form(
        username: Option<&str>,
        password: Option<&str>,
        consent: Option<&str>,
    ) -> Self {
        Self {
            username: Username::new(username.unwrap_or_default()),
            password: Password::new(Secret::new(password.unwrap_or_default().to_string())),
            consent: ConsentFlag::from_form_value(consent),
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn consent_accepted(&self) -> bool {
        self.consent.is_accepted()
    }
}
