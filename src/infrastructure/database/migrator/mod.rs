//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users;
mod m20240101_000002_create_teams;
mod m20240101_000003_create_plans;
mod m20240101_000004_create_subscriptions;
mod m20240101_000005_create_subscription_activations;
mod m20240101_000006_create_orders;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users::Migration),
            Box::new(m20240101_000002_create_teams::Migration),
            Box::new(m20240101_000003_create_plans::Migration),
            Box::new(m20240101_000004_create_subscriptions::Migration),
            Box::new(m20240101_000005_create_subscription_activations::Migration),
            Box::new(m20240101_000006_create_orders::Migration),
        ]
    }
}
