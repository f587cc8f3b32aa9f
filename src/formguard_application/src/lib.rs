pub mod use_cases;

pub use use_cases::{
    EntryPointUseCase, FormLoginUseCase, LoginError, LoginFlow, LogoutUseCase, session_state,
};
