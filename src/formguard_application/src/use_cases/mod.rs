pub mod entry_point;
pub mod login;
pub mod logout;
pub mod session_state;

pub use entry_point::EntryPointUseCase;
pub use login::{FormLoginUseCase, LoginError, LoginFlow};
pub use logout::LogoutUseCase;
