//! Create subscription_activations table

use sea_orm_migration::prelude::*;

use super::m20240101_000004_create_subscriptions::Subscriptions;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubscriptionActivations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubscriptionActivations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubscriptionActivations::SubscriptionId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubscriptionActivations::ActivationDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubscriptionActivations::ExpiryDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscription_activations_subscription")
                            .from(
                                SubscriptionActivations::Table,
                                SubscriptionActivations::SubscriptionId,
                            )
                            .to(Subscriptions::Table, Subscriptions::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubscriptionActivations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum SubscriptionActivations {
    Table,
    Id,
    SubscriptionId,
    ActivationDate,
    ExpiryDate,
}
