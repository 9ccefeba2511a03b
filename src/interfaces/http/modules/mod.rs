pub mod auth;
pub mod health;
pub mod plans;
pub mod subscriptions;
pub mod teams;
