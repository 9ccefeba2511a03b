//! Subscription aggregate
//!
//! Subscriptions plus the order and activation rows stored against them.

pub mod model;
pub mod repository;

pub use model::{NewSubscription, Order, Subscription, SubscriptionActivation};
pub use repository::SubscriptionRepository;
