//! SeaORM implementation of PlanRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use super::{db_err, write_err};
use crate::domain::{DomainError, DomainResult, NewPlan, Plan, PlanRepository};
use crate::infrastructure::database::entities::plan;

pub struct SeaOrmPlanRepository {
    db: DatabaseConnection,
}

impl SeaOrmPlanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn entity_to_domain(p: plan::Model) -> Plan {
    Plan {
        id: p.id,
        name: p.name,
        price: p.price,
    }
}

fn name_taken(name: &str) -> String {
    format!("Plan name '{}' is already taken", name)
}

#[async_trait]
impl PlanRepository for SeaOrmPlanRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Plan>> {
        let model = plan::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Plan>> {
        let model = plan::Entity::find()
            .filter(plan::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_names(&self, names: &[&str]) -> DomainResult<Vec<Plan>> {
        let models = plan::Entity::find()
            .filter(plan::Column::Name.is_in(names.iter().copied()))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_all(&self) -> DomainResult<Vec<Plan>> {
        let models = plan::Entity::find()
            .order_by_asc(plan::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn create(&self, p: NewPlan) -> DomainResult<Plan> {
        let conflict = name_taken(&p.name);
        let model = plan::ActiveModel {
            name: Set(p.name),
            price: Set(p.price),
            ..Default::default()
        };
        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_err(e, &conflict))?;
        info!("Plan saved: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn update(&self, p: Plan) -> DomainResult<Plan> {
        let existing = plan::Entity::find_by_id(p.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("Plan", "id", p.id));
        };

        let conflict = name_taken(&p.name);
        let mut model: plan::ActiveModel = existing.into();
        model.name = Set(p.name);
        model.price = Set(p.price);
        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| write_err(e, &conflict))?;
        info!("Plan updated: {} ({})", updated.name, updated.id);
        Ok(entity_to_domain(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_database;

    fn new_plan(name: &str, price: i32) -> NewPlan {
        NewPlan {
            name: name.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_name() {
        let repo = SeaOrmPlanRepository::new(test_database().await);
        for (name, price) in [("pro", 600), ("basic", 300), ("enterprise", 900)] {
            repo.create(new_plan(name, price)).await.unwrap();
        }

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["basic", "enterprise", "pro"]);
    }

    #[tokio::test]
    async fn find_by_names_skips_unknown() {
        let repo = SeaOrmPlanRepository::new(test_database().await);
        repo.create(new_plan("basic", 300)).await.unwrap();
        repo.create(new_plan("pro", 600)).await.unwrap();

        let found = repo.find_by_names(&["basic", "missing"]).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].price, 300);
    }

    #[tokio::test]
    async fn duplicate_name_is_conflict() {
        let repo = SeaOrmPlanRepository::new(test_database().await);
        repo.create(new_plan("basic", 300)).await.unwrap();

        let err = repo.create(new_plan("basic", 100)).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_replaces_name_and_price() {
        let repo = SeaOrmPlanRepository::new(test_database().await);
        let created = repo.create(new_plan("basic", 300)).await.unwrap();

        let updated = repo
            .update(Plan {
                id: created.id,
                name: "starter".to_string(),
                price: 250,
            })
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);

        let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "starter");
        assert_eq!(stored.price, 250);
        assert!(repo.find_by_name("basic").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_missing_plan_is_not_found() {
        let repo = SeaOrmPlanRepository::new(test_database().await);
        let err = repo
            .update(Plan {
                id: 7,
                name: "ghost".to_string(),
                price: 1,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
