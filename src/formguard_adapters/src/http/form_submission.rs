use std::collections::HashMap;

use formguard_core::LoginRequest;

use crate::session::MemorySession;

/// A decoded form submission together with its session.
///
/// Lets hosts without a framework bridge (and tests) drive a
/// [`FormAuthenticator`](formguard_core::FormAuthenticator) directly.
#[derive(Debug, Clone, Default)]
pub struct FormSubmission {
    path: String,
    fields: HashMap<String, String>,
    session: MemorySession,
}

impl FormSubmission {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn with_session(mut self, session: MemorySession) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> &MemorySession {
        &self.session
    }

    pub fn into_session(self) -> MemorySession {
        self.session
    }
}

impl LoginRequest for FormSubmission {
    type Session = MemorySession;

    fn path(&self) -> &str {
        &self.path
    }

    fn form_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    fn session_mut(&mut self) -> &mut Self::Session {
        &mut self.session
    }
}
