//! Subscriptions owned by the authenticated user

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
