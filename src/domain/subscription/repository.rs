use async_trait::async_trait;

use super::{NewSubscription, Order, Subscription, SubscriptionActivation};
use crate::domain::DomainResult;

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Subscription>>;
    async fn find_by_user(&self, user_id: i32) -> DomainResult<Vec<Subscription>>;
    async fn create(&self, subscription: NewSubscription) -> DomainResult<Subscription>;
    async fn find_orders(&self, subscription_id: i32) -> DomainResult<Vec<Order>>;
    async fn find_activations(
        &self,
        subscription_id: i32,
    ) -> DomainResult<Vec<SubscriptionActivation>>;
}
