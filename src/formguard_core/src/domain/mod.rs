pub mod consent;
pub mod failure;
pub mod login_attempt;
pub mod password;
pub mod user;
pub mod username;
