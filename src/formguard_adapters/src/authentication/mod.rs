pub mod form_authenticator;

pub use form_authenticator::{LoginFormAuthenticator, RouteNames};
