use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

/// A plaintext password candidate as typed by the user.
///
/// Wrapped in a [`Secret`] so it never shows up in `Debug` output or traces.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Password(Secret<String>);

impl Password {
    pub fn new(value: Secret<String>) -> Self {
        Self(value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl From<Secret<String>> for Password {
    fn from(value: Secret<String>) -> Self {
        Self(value)
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self(Secret::new(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_the_password() {
        let password = Password::from("hunter2");
        let debug = format!("{:?}", password);

        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn empty_password_is_detected() {
        assert!(Password::from("").is_empty());
        assert!(!Password::from("x").is_empty());
    }
}
