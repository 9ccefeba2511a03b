//! Repository traits for the domain layer
//!
//! `RepositoryProvider` gives unified access to all per-aggregate
//! repositories. Consumers request only the repository they need:
//!
//! ```ignore
//! async fn handle(repos: &dyn RepositoryProvider) {
//!     let plan = repos.plans().find_by_name("pro").await?;
//! }
//! ```

use super::plan::PlanRepository;
use super::subscription::SubscriptionRepository;
use super::team::TeamRepository;
use super::user::UserRepository;

pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn teams(&self) -> &dyn TeamRepository;
    fn plans(&self) -> &dyn PlanRepository;
    fn subscriptions(&self) -> &dyn SubscriptionRepository;
}
