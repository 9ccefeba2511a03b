//! Identity module: registration, login, profile, password change
//! and the admin check used by other services.

pub mod service;

pub use service::{require_admin, AuthResult, RegisterUser, UserService};
