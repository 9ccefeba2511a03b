use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::db_err;
use crate::domain::{
    DomainResult, NewSubscription, Order, Subscription, SubscriptionActivation,
    SubscriptionRepository,
};
use crate::infrastructure::database::entities::{order, subscription, subscription_activation};

// ── Conversion helpers ──────────────────────────────────────────

fn subscription_to_domain(m: subscription::Model) -> Subscription {
    Subscription {
        id: m.id,
        plan_id: m.plan_id,
        user_id: m.user_id,
        start_date: m.start_date,
        end_date: m.end_date,
    }
}

fn order_to_domain(m: order::Model) -> Order {
    Order {
        id: m.id,
        subscription_id: m.subscription_id,
        activation_id: m.activation_id,
        amount_paid: m.amount_paid,
        payment_date: m.payment_date,
    }
}

fn activation_to_domain(m: subscription_activation::Model) -> SubscriptionActivation {
    SubscriptionActivation {
        id: m.id,
        subscription_id: m.subscription_id,
        activation_date: m.activation_date,
        expiry_date: m.expiry_date,
    }
}

// ── SeaOrmSubscriptionRepository ────────────────────────────────

pub struct SeaOrmSubscriptionRepository {
    db: DatabaseConnection,
}

impl SeaOrmSubscriptionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubscriptionRepository for SeaOrmSubscriptionRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Subscription>> {
        let model = subscription::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(subscription_to_domain))
    }

    async fn find_by_user(&self, user_id: i32) -> DomainResult<Vec<Subscription>> {
        let models = subscription::Entity::find()
            .filter(subscription::Column::UserId.eq(user_id))
            .order_by_desc(subscription::Column::StartDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(subscription_to_domain).collect())
    }

    async fn create(&self, new: NewSubscription) -> DomainResult<Subscription> {
        let model = subscription::ActiveModel {
            plan_id: Set(new.plan_id),
            user_id: Set(new.user_id),
            start_date: Set(new.start_date),
            end_date: Set(new.end_date),
            ..Default::default()
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(subscription_to_domain(inserted))
    }

    async fn find_orders(&self, subscription_id: i32) -> DomainResult<Vec<Order>> {
        let models = order::Entity::find()
            .filter(order::Column::SubscriptionId.eq(subscription_id))
            .order_by_asc(order::Column::PaymentDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(order_to_domain).collect())
    }

    async fn find_activations(
        &self,
        subscription_id: i32,
    ) -> DomainResult<Vec<SubscriptionActivation>> {
        let models = subscription_activation::Entity::find()
            .filter(subscription_activation::Column::SubscriptionId.eq(subscription_id))
            .order_by_asc(subscription_activation::Column::ActivationDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(activation_to_domain).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::{NewPlan, NewUser, PlanRepository, UserRepository};
    use crate::infrastructure::database::repositories::plan_repository::SeaOrmPlanRepository;
    use crate::infrastructure::database::repositories::user_repository::SeaOrmUserRepository;
    use crate::infrastructure::database::test_database;

    #[tokio::test]
    async fn stored_orders_and_activations_are_read_back() {
        let db = test_database().await;
        let user = SeaOrmUserRepository::new(db.clone())
            .create(NewUser {
                email: "sub@example.com".into(),
                name: "Sub".into(),
                password_hash: None,
                locale: "en".into(),
                timezone: None,
                is_admin: false,
            })
            .await
            .unwrap();
        let plan = SeaOrmPlanRepository::new(db.clone())
            .create(NewPlan {
                name: "basic".into(),
                price: 300,
            })
            .await
            .unwrap();

        let repo = SeaOrmSubscriptionRepository::new(db.clone());
        let now = Utc::now();
        let sub = repo
            .create(NewSubscription::one_cycle(plan.id, user.id, now))
            .await
            .unwrap();

        let activation = subscription_activation::ActiveModel {
            subscription_id: Set(sub.id),
            activation_date: Set(now),
            expiry_date: Set(now + Duration::days(30)),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
        order::ActiveModel {
            subscription_id: Set(sub.id),
            activation_id: Set(activation.id),
            amount_paid: Set(300),
            payment_date: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let orders = repo.find_orders(sub.id).await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].amount_paid, 300);
        assert_eq!(orders[0].activation_id, activation.id);

        let activations = repo.find_activations(sub.id).await.unwrap();
        assert_eq!(activations.len(), 1);

        let mine = repo.find_by_user(user.id).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].plan_id, plan.id);
        assert!(repo.find_by_user(user.id + 1).await.unwrap().is_empty());
    }
}
