pub mod auth_context;
pub mod use_auth;

pub use auth_context::{use_auth_context, AuthContextProvider};
pub use use_auth::{use_auth, AuthSession, UseAuthHandle};
