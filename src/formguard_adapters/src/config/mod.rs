pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    FormGuardSettings, PasswordEncoding, RouteSetting, RouteSettings, SecuritySettings,
    ServerSettings, SessionSettings, SettingsError, UserSettings,
};
