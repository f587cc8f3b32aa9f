pub mod env {
    /// Prefix of environment variables overriding settings, e.g.
    /// `FORMGUARD__SERVER__ADDRESS`.
    pub const SETTINGS_ENV_PREFIX: &str = "FORMGUARD";
    pub const SETTINGS_ENV_SEPARATOR: &str = "__";
    /// Path (without extension) of the optional settings file.
    pub const SETTINGS_FILE_ENV_VAR: &str = "FORMGUARD_SETTINGS_FILE";
}

pub const DEFAULT_SETTINGS_FILE: &str = "config/base";

pub mod defaults {
    pub const SERVER_ADDRESS: &str = "127.0.0.1:3000";
    pub const SESSION_COOKIE_NAME: &str = "formguard_session";
    /// Sessions untouched for this long are discarded.
    pub const SESSION_IDLE_TIMEOUT_SECS: u64 = 30 * 60;
    pub const SESSION_SWEEP_INTERVAL_SECS: u64 = 60;

    pub const LOGIN_CHECK_ROUTE: (&str, &str) = ("login_check_route", "/login_check");
    pub const LOGIN_FORM_ROUTE: (&str, &str) = ("login_route", "/login");
    pub const DEFAULT_SUCCESS_ROUTE: (&str, &str) = ("admin", "/admin");
    pub const LOGOUT_ROUTE: (&str, &str) = ("logout_route", "/logout");
}

pub mod test {
    pub const SERVER_ADDRESS: &str = "127.0.0.1:0";
}
