use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, Set, TransactionTrait,
};

use super::{db_err, write_err};
use crate::domain::{DomainError, DomainResult, NewUser, User, UserRepository};
use crate::infrastructure::database::entities::{team, user};

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn new_user_model(new_user: NewUser) -> user::ActiveModel {
    let now = Utc::now();
    user::ActiveModel {
        email: Set(new_user.email),
        name: Set(new_user.name),
        password_hash: Set(new_user.password_hash),
        email_verified: Set(false),
        locale: Set(new_user.locale),
        timezone: Set(new_user.timezone),
        is_admin: Set(new_user.is_admin),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

async fn insert_user<C: ConnectionTrait>(conn: &C, new_user: NewUser) -> DomainResult<user::Model> {
    new_user_model(new_user)
        .insert(conn)
        .await
        .map_err(|e| write_err(e, "Email already exists"))
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        name: model.name,
        password_hash: model.password_hash,
        email_verified: model.email_verified,
        locale: model.locale,
        timezone: model.timezone,
        is_admin: model.is_admin,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn count(&self) -> DomainResult<u64> {
        user::Entity::find().count(&self.db).await.map_err(db_err)
    }

    async fn create(&self, new_user: NewUser) -> DomainResult<User> {
        let inserted = insert_user(&self.db, new_user).await?;
        Ok(user_model_to_domain(inserted))
    }

    async fn create_with_personal_team(&self, new_user: NewUser) -> DomainResult<User> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let inserted = match insert_user(&txn, new_user).await {
            Ok(model) => model,
            Err(e) => {
                txn.rollback().await.map_err(db_err)?;
                return Err(e);
            }
        };

        let personal_team = team::ActiveModel {
            name: Set(inserted.name.clone()),
            is_personal: Set(true),
            user_id: Set(inserted.id),
            created_at: Set(inserted.created_at),
            updated_at: Set(inserted.created_at),
            ..Default::default()
        };
        if let Err(e) = personal_team.insert(&txn).await {
            txn.rollback().await.map_err(db_err)?;
            return Err(db_err(e));
        }

        txn.commit().await.map_err(db_err)?;
        Ok(user_model_to_domain(inserted))
    }

    async fn update_password(&self, id: i32, password_hash: &str) -> DomainResult<()> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("User", "id", id));
        };

        let mut active: user::ActiveModel = existing.into();
        active.password_hash = Set(Some(password_hash.to_string()));
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await.map_err(db_err)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_database;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            name: "Test".to_string(),
            password_hash: Some("hash".to_string()),
            locale: "en".to_string(),
            timezone: Some("Asia/Riyadh".to_string()),
            is_admin: false,
        }
    }

    #[tokio::test]
    async fn create_and_find_by_email() {
        let repo = SeaOrmUserRepository::new(test_database().await);

        let created = repo.create(new_user("a@example.com")).await.unwrap();
        assert!(created.id > 0);
        assert!(!created.email_verified);

        let found = repo.find_by_email("a@example.com").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.timezone.as_deref(), Some("Asia/Riyadh"));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn duplicate_email_is_conflict() {
        let repo = SeaOrmUserRepository::new(test_database().await);
        repo.create(new_user("dup@example.com")).await.unwrap();

        let err = repo.create(new_user("dup@example.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn create_with_personal_team_writes_both_rows() {
        let db = test_database().await;
        let repo = SeaOrmUserRepository::new(db.clone());

        let created = repo
            .create_with_personal_team(new_user("team@example.com"))
            .await
            .unwrap();

        let teams = team::Entity::find()
            .filter(team::Column::UserId.eq(created.id))
            .all(&db)
            .await
            .unwrap();
        assert_eq!(teams.len(), 1);
        assert!(teams[0].is_personal);
        assert_eq!(teams[0].name, "Test");
    }

    #[tokio::test]
    async fn failed_team_insert_leaves_no_user() {
        let db = test_database().await;
        db.execute_unprepared(
            "CREATE TRIGGER reject_teams BEFORE INSERT ON teams \
             BEGIN SELECT RAISE(ABORT, 'team insert rejected'); END;",
        )
        .await
        .unwrap();
        let repo = SeaOrmUserRepository::new(db.clone());

        let err = repo
            .create_with_personal_team(new_user("orphan@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Database(_)));

        assert!(repo.find_by_email("orphan@example.com").await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn create_with_personal_team_rejects_duplicate_email() {
        let repo = SeaOrmUserRepository::new(test_database().await);
        repo.create_with_personal_team(new_user("dup@example.com"))
            .await
            .unwrap();

        let err = repo
            .create_with_personal_team(new_user("dup@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn update_password_of_missing_user_is_not_found() {
        let repo = SeaOrmUserRepository::new(test_database().await);
        let err = repo.update_password(99, "x").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
