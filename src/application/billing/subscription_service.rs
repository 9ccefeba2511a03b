//! Subscriptions owned by the authenticated user

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use super::plan_service::UpgradeQuote;
use crate::domain::{
    DomainError, DomainResult, NewSubscription, Order, Plan, RepositoryProvider, Subscription,
    SubscriptionActivation,
};

#[derive(Debug, Clone)]
pub struct SubscriptionSummary {
    pub subscription: Subscription,
    pub plan: Plan,
}

#[derive(Debug, Clone)]
pub struct SubscriptionDetails {
    pub subscription: Subscription,
    pub plan: Plan,
    pub orders: Vec<Order>,
    pub activations: Vec<SubscriptionActivation>,
}

pub struct SubscriptionService {
    repos: Arc<dyn RepositoryProvider>,
}

impl SubscriptionService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Start a single billing cycle on `plan_name` at `now`.
    pub async fn subscribe(
        &self,
        user_id: i32,
        plan_name: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<SubscriptionSummary> {
        let plan = self.plan_by_name(plan_name).await?;
        let subscription = self
            .repos
            .subscriptions()
            .create(NewSubscription::one_cycle(plan.id, user_id, now))
            .await?;

        info!(
            subscription_id = subscription.id,
            user_id,
            plan = %plan.name,
            "Subscription created"
        );
        Ok(SubscriptionSummary { subscription, plan })
    }

    pub async fn list_subscriptions(&self, user_id: i32) -> DomainResult<Vec<SubscriptionSummary>> {
        let subscriptions = self.repos.subscriptions().find_by_user(user_id).await?;
        let plans: HashMap<i32, Plan> = self
            .repos
            .plans()
            .find_all()
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        subscriptions
            .into_iter()
            .map(|subscription| {
                let plan = plans
                    .get(&subscription.plan_id)
                    .cloned()
                    .ok_or_else(|| DomainError::not_found("Plan", "id", subscription.plan_id))?;
                Ok(SubscriptionSummary { subscription, plan })
            })
            .collect()
    }

    pub async fn get_subscription(&self, user_id: i32, id: i32) -> DomainResult<SubscriptionDetails> {
        let subscription = self.owned_subscription(user_id, id).await?;
        let plan = self.plan_by_id(subscription.plan_id).await?;
        let orders = self.repos.subscriptions().find_orders(id).await?;
        let activations = self.repos.subscriptions().find_activations(id).await?;

        Ok(SubscriptionDetails {
            subscription,
            plan,
            orders,
            activations,
        })
    }

    /// Quote moving subscription `id` to `target_name`, with the remaining
    /// days taken from the stored end date as seen at `now`.
    pub async fn quote_upgrade(
        &self,
        user_id: i32,
        id: i32,
        target_name: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<UpgradeQuote> {
        let subscription = self.owned_subscription(user_id, id).await?;
        let current = self.plan_by_id(subscription.plan_id).await?;
        let target = self.plan_by_name(target_name).await?;

        Ok(UpgradeQuote::compute(
            current,
            target,
            subscription.remaining_days(now),
        ))
    }

    async fn owned_subscription(&self, user_id: i32, id: i32) -> DomainResult<Subscription> {
        let subscription = self
            .repos
            .subscriptions()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Subscription", "id", id))?;

        if !subscription.is_owned_by(user_id) {
            return Err(DomainError::Forbidden(
                "Subscription belongs to another user".into(),
            ));
        }
        Ok(subscription)
    }

    async fn plan_by_id(&self, id: i32) -> DomainResult<Plan> {
        self.repos
            .plans()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Plan", "id", id))
    }

    async fn plan_by_name(&self, name: &str) -> DomainResult<Plan> {
        self.repos
            .plans()
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::not_found("Plan", "name", name))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::application::testing;
    use crate::domain::{NewPlan, BILLING_CYCLE_DAYS};

    async fn setup() -> (SubscriptionService, Arc<dyn RepositoryProvider>, i32) {
        let repos = testing::repos().await;
        for (name, price) in [("basic", 300), ("pro", 600)] {
            repos
                .plans()
                .create(NewPlan {
                    name: name.into(),
                    price,
                })
                .await
                .unwrap();
        }
        let user = testing::user(repos.as_ref(), "sub@mail.com", false).await;
        (SubscriptionService::new(repos.clone()), repos, user.id)
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn subscribe_spans_one_cycle() {
        let (svc, _, user) = setup().await;
        let created = svc.subscribe(user, "basic", start()).await.unwrap();

        assert_eq!(created.plan.name, "basic");
        assert_eq!(
            created.subscription.end_date - created.subscription.start_date,
            Duration::days(i64::from(BILLING_CYCLE_DAYS))
        );

        let listed = svc.list_subscriptions(user).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].plan.price, 300);
    }

    #[tokio::test]
    async fn subscribe_to_unknown_plan_is_not_found() {
        let (svc, _, user) = setup().await;
        let err = svc.subscribe(user, "platinum", start()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn other_users_subscription_is_forbidden() {
        let (svc, repos, user) = setup().await;
        let intruder = testing::user(repos.as_ref(), "intruder@mail.com", false).await;
        let created = svc.subscribe(user, "basic", start()).await.unwrap();
        let id = created.subscription.id;

        let err = svc.get_subscription(intruder.id, id).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
        let err = svc
            .quote_upgrade(intruder.id, id, "pro", start())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));

        let details = svc.get_subscription(user, id).await.unwrap();
        assert!(details.orders.is_empty());
        assert!(details.activations.is_empty());
    }

    #[tokio::test]
    async fn quote_uses_days_left_until_end_date() {
        let (svc, _, user) = setup().await;
        let created = svc.subscribe(user, "basic", start()).await.unwrap();
        let id = created.subscription.id;

        let quote = svc
            .quote_upgrade(user, id, "pro", start() + Duration::days(20))
            .await
            .unwrap();
        assert_eq!(quote.remaining_days, 10);
        assert_eq!(quote.price, 100.0);

        let expired = svc
            .quote_upgrade(user, id, "pro", start() + Duration::days(60))
            .await
            .unwrap();
        assert_eq!(expired.remaining_days, 0);
        assert!(expired.price.abs() < 1e-9);
    }

    #[tokio::test]
    async fn missing_subscription_is_not_found() {
        let (svc, _, user) = setup().await;
        let err = svc.get_subscription(user, 42).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
