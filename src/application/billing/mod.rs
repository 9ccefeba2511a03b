//! Plans, subscriptions and plan-change quotes

pub mod plan_service;
pub mod subscription_service;

pub use plan_service::{PlanService, UpgradeQuote};
pub use subscription_service::{SubscriptionDetails, SubscriptionService, SubscriptionSummary};
