use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

use super::constants::{DEFAULT_SETTINGS_FILE, defaults, env};
use crate::authentication::RouteNames;
use crate::routing::StaticPathResolver;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormGuardSettings {
    pub server: ServerSettings,
    pub session: SessionSettings,
    pub routes: RouteSettings,
    pub security: SecuritySettings,
    #[serde(default = "default_users")]
    pub users: Vec<UserSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub cookie_name: String,
    pub idle_timeout_secs: u64,
    pub sweep_interval_secs: u64,
}

impl SessionSettings {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    /// Never zero, a zero-period interval cannot tick.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs.max(1))
    }
}

/// A logical route name and the path it resolves to.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RouteSetting {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteSettings {
    pub login_check: RouteSetting,
    pub login_form: RouteSetting,
    pub default_success: RouteSetting,
    pub logout: RouteSetting,
}

impl RouteSettings {
    pub fn route_names(&self) -> RouteNames {
        RouteNames {
            login_check: self.login_check.name.clone(),
            login_form: self.login_form.name.clone(),
            default_success: self.default_success.name.clone(),
        }
    }

    pub fn path_resolver(&self) -> StaticPathResolver {
        StaticPathResolver::new(
            [
                &self.login_check,
                &self.login_form,
                &self.default_success,
                &self.logout,
            ]
            .into_iter()
            .map(|route| (route.name.clone(), route.path.clone())),
        )
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PasswordEncoding {
    Argon2,
    Plaintext,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecuritySettings {
    pub password_encoding: PasswordEncoding,
    /// Seed for the login coin flip. Unset means a fresh thread RNG.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

/// An in-memory user declared in configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UserSettings {
    pub username: String,
    pub password: Secret<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

fn default_users() -> Vec<UserSettings> {
    vec![UserSettings {
        username: "alice".to_string(),
        password: Secret::new("wonderland".to_string()),
        roles: vec!["ROLE_ADMIN".to_string()],
    }]
}

impl FormGuardSettings {
    /// Load settings from `.env`, the settings file and the environment.
    ///
    /// The settings file defaults to `config/base.{json,toml,...}` and may be
    /// moved with `FORMGUARD_SETTINGS_FILE`. It is optional.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let file = std::env::var(env::SETTINGS_FILE_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_SETTINGS_FILE.to_string());

        Self::builder()?
            .add_source(File::with_name(&file).required(false))
            .add_source(
                Environment::with_prefix(env::SETTINGS_ENV_PREFIX)
                    .separator(env::SETTINGS_ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(SettingsError::from)
    }

    /// Load settings from a single file on top of the defaults, ignoring the
    /// environment.
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        Self::builder()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
            .map_err(SettingsError::from)
    }

    /// Built-in defaults only.
    pub fn defaults() -> Result<Self, SettingsError> {
        Self::builder()?
            .build()?
            .try_deserialize()
            .map_err(SettingsError::from)
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let route = |builder: ConfigBuilder<DefaultState>,
                     key: &str,
                     (name, path): (&str, &str)|
         -> Result<ConfigBuilder<DefaultState>, ConfigError> {
            builder
                .set_default(format!("routes.{key}.name"), name)?
                .set_default(format!("routes.{key}.path"), path)
        };

        let builder = Config::builder()
            .set_default("server.address", defaults::SERVER_ADDRESS)?
            .set_default("session.cookie_name", defaults::SESSION_COOKIE_NAME)?
            .set_default("session.idle_timeout_secs", defaults::SESSION_IDLE_TIMEOUT_SECS)?
            .set_default(
                "session.sweep_interval_secs",
                defaults::SESSION_SWEEP_INTERVAL_SECS,
            )?
            .set_default("security.password_encoding", "argon2")?;
        let builder = route(builder, "login_check", defaults::LOGIN_CHECK_ROUTE)?;
        let builder = route(builder, "login_form", defaults::LOGIN_FORM_ROUTE)?;
        let builder = route(builder, "default_success", defaults::DEFAULT_SUCCESS_ROUTE)?;
        route(builder, "logout", defaults::LOGOUT_ROUTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formguard_core::PathResolver;
    use secrecy::ExposeSecret;

    #[test]
    fn defaults_are_complete() {
        let settings = FormGuardSettings::defaults().unwrap();

        assert_eq!(settings.server.address, defaults::SERVER_ADDRESS);
        assert_eq!(settings.session.cookie_name, defaults::SESSION_COOKIE_NAME);
        assert_eq!(settings.session.idle_timeout(), Duration::from_secs(1800));
        assert_eq!(settings.session.sweep_interval(), Duration::from_secs(60));
        assert_eq!(settings.security.password_encoding, PasswordEncoding::Argon2);
        assert_eq!(settings.security.random_seed, None);
        assert_eq!(settings.routes.route_names(), RouteNames::default());
        assert_eq!(settings.users.len(), 1);
        assert_eq!(settings.users[0].username, "alice");
    }

    #[test]
    fn path_resolver_knows_every_configured_route() {
        let settings = FormGuardSettings::defaults().unwrap();
        let resolver = settings.routes.path_resolver();

        assert_eq!(resolver.generate("login_check_route").unwrap(), "/login_check");
        assert_eq!(resolver.generate("login_route").unwrap(), "/login");
        assert_eq!(resolver.generate("admin").unwrap(), "/admin");
        assert_eq!(resolver.generate("logout_route").unwrap(), "/logout");
    }

    #[test]
    fn file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("formguard-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"{
                "routes": { "default_success": { "name": "dashboard", "path": "/dashboard" } },
                "session": { "idle_timeout_secs": 90, "sweep_interval_secs": 0 },
                "security": { "password_encoding": "plaintext", "random_seed": 7 },
                "users": [
                    { "username": "bob", "password": "builder", "roles": ["ROLE_USER"] },
                    { "username": "carol", "password": "singer" }
                ]
            }"#,
        )
        .unwrap();

        let settings = FormGuardSettings::load_from_file(&path);
        std::fs::remove_file(&path).unwrap();
        let settings = settings.unwrap();

        assert_eq!(settings.routes.default_success.path, "/dashboard");
        assert_eq!(settings.routes.route_names().default_success, "dashboard");
        assert_eq!(settings.routes.login_form.path, "/login");
        assert_eq!(settings.session.cookie_name, defaults::SESSION_COOKIE_NAME);
        assert_eq!(settings.session.idle_timeout(), Duration::from_secs(90));
        assert_eq!(settings.session.sweep_interval(), Duration::from_secs(1));
        assert_eq!(settings.security.password_encoding, PasswordEncoding::Plaintext);
        assert_eq!(settings.security.random_seed, Some(7));
        assert_eq!(settings.users.len(), 2);
        assert_eq!(settings.users[0].password.expose_secret(), "builder");
        assert!(settings.users[1].roles.is_empty());
    }
}
