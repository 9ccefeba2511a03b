//! Domain layer: entities, the pricing model, and repository ports.

pub mod plan;
pub mod repositories;
pub mod subscription;
pub mod team;
pub mod user;

pub use plan::{upgrade_price, NewPlan, Plan, PlanRepository, BILLING_CYCLE_DAYS};
pub use repositories::RepositoryProvider;
pub use subscription::{
    NewSubscription, Order, Subscription, SubscriptionActivation, SubscriptionRepository,
};
pub use team::{NewTeam, Team, TeamRepository};
pub use user::{NewUser, User, UserRepository};

pub use crate::shared::errors::{DomainError, DomainResult};
