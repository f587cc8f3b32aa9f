pub mod bootstrap;
pub mod login_service;
pub mod telemetry;

pub use bootstrap::{BootstrapError, ConfiguredAuthenticator, build_authenticator, build_service};
pub use login_service::LoginService;
pub use telemetry::init_tracing;
