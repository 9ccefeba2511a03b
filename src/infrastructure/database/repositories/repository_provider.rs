//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{
    PlanRepository, RepositoryProvider, SubscriptionRepository, TeamRepository, UserRepository,
};

use super::plan_repository::SeaOrmPlanRepository;
use super::subscription_repository::SeaOrmSubscriptionRepository;
use super::team_repository::SeaOrmTeamRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let plans = repos.plans().find_all().await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    teams: SeaOrmTeamRepository,
    plans: SeaOrmPlanRepository,
    subscriptions: SeaOrmSubscriptionRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            teams: SeaOrmTeamRepository::new(db.clone()),
            plans: SeaOrmPlanRepository::new(db.clone()),
            subscriptions: SeaOrmSubscriptionRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn teams(&self) -> &dyn TeamRepository {
        &self.teams
    }

    fn plans(&self) -> &dyn PlanRepository {
        &self.plans
    }

    fn subscriptions(&self) -> &dyn SubscriptionRepository {
        &self.subscriptions
    }
}
