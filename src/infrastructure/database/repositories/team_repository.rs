use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::db_err;
use crate::domain::{DomainError, DomainResult, NewTeam, Team, TeamRepository};
use crate::infrastructure::database::entities::team;

pub struct SeaOrmTeamRepository {
    db: DatabaseConnection,
}

impl SeaOrmTeamRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn team_model_to_domain(model: team::Model) -> Team {
    Team {
        id: model.id,
        name: model.name,
        is_personal: model.is_personal,
        user_id: model.user_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl TeamRepository for SeaOrmTeamRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Team>> {
        let model = team::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(team_model_to_domain))
    }

    async fn find_by_owner(&self, user_id: i32) -> DomainResult<Vec<Team>> {
        let models = team::Entity::find()
            .filter(team::Column::UserId.eq(user_id))
            .order_by_asc(team::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(team_model_to_domain).collect())
    }

    async fn create(&self, new_team: NewTeam) -> DomainResult<Team> {
        let now = Utc::now();
        let model = team::ActiveModel {
            name: Set(new_team.name),
            is_personal: Set(new_team.is_personal),
            user_id: Set(new_team.user_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(team_model_to_domain(inserted))
    }

    async fn rename(&self, id: i32, name: &str) -> DomainResult<Team> {
        let existing = team::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("Team", "id", id));
        };

        let mut active: team::ActiveModel = existing.into();
        active.name = Set(name.to_string());
        active.updated_at = Set(Utc::now());
        let updated = active.update(&self.db).await.map_err(db_err)?;

        Ok(team_model_to_domain(updated))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = team::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Team", "id", id));
        }
        Ok(())
    }
}
