//! Database entities module

pub mod order;
pub mod plan;
pub mod subscription;
pub mod subscription_activation;
pub mod team;
pub mod user;

pub use order::Entity as Order;
pub use plan::Entity as Plan;
pub use subscription::Entity as Subscription;
pub use subscription_activation::Entity as SubscriptionActivation;
pub use team::Entity as Team;
pub use user::Entity as User;
