//! Team management for the authenticated user

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, DomainResult, NewTeam, RepositoryProvider, Team};

pub struct TeamService {
    repos: Arc<dyn RepositoryProvider>,
}

impl TeamService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list_teams(&self, user_id: i32) -> DomainResult<Vec<Team>> {
        self.repos.teams().find_by_owner(user_id).await
    }

    pub async fn create_team(&self, user_id: i32, name: &str) -> DomainResult<Team> {
        let name = checked_name(name)?;
        let team = self
            .repos
            .teams()
            .create(NewTeam {
                name,
                is_personal: false,
                user_id,
            })
            .await?;

        info!(team_id = team.id, user_id, "Team created");
        Ok(team)
    }

    pub async fn rename_team(&self, user_id: i32, team_id: i32, name: &str) -> DomainResult<Team> {
        let name = checked_name(name)?;
        self.owned_team(user_id, team_id).await?;
        self.repos.teams().rename(team_id, &name).await
    }

    /// Personal teams are kept for the lifetime of the account.
    pub async fn delete_team(&self, user_id: i32, team_id: i32) -> DomainResult<()> {
        let team = self.owned_team(user_id, team_id).await?;
        if team.is_personal {
            return Err(DomainError::Validation(
                "Personal team cannot be deleted".into(),
            ));
        }

        self.repos.teams().delete(team_id).await?;
        info!(team_id, user_id, "Team deleted");
        Ok(())
    }

    async fn owned_team(&self, user_id: i32, team_id: i32) -> DomainResult<Team> {
        let team = self
            .repos
            .teams()
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Team", "id", team_id))?;

        if !team.is_owned_by(user_id) {
            return Err(DomainError::Forbidden("Team belongs to another user".into()));
        }
        Ok(team)
    }
}

fn checked_name(name: &str) -> DomainResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::Validation("Team name is required".into()));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing;

    #[tokio::test]
    async fn create_and_list_in_id_order() {
        let repos = testing::repos().await;
        let owner = testing::user(repos.as_ref(), "owner@mail.com", false).await;
        let svc = TeamService::new(repos);

        let first = svc.create_team(owner.id, "Alpha").await.unwrap();
        let second = svc.create_team(owner.id, "  Beta  ").await.unwrap();
        assert!(!first.is_personal);
        assert_eq!(second.name, "Beta");

        let teams = svc.list_teams(owner.id).await.unwrap();
        let ids: Vec<i32> = teams.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let repos = testing::repos().await;
        let owner = testing::user(repos.as_ref(), "owner@mail.com", false).await;
        let svc = TeamService::new(repos);

        let err = svc.create_team(owner.id, "   ").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn only_owner_can_rename_or_delete() {
        let repos = testing::repos().await;
        let owner = testing::user(repos.as_ref(), "owner@mail.com", false).await;
        let other = testing::user(repos.as_ref(), "other@mail.com", false).await;
        let svc = TeamService::new(repos);

        let team = svc.create_team(owner.id, "Alpha").await.unwrap();

        let err = svc.rename_team(other.id, team.id, "Mine").await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
        let err = svc.delete_team(other.id, team.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));

        let renamed = svc.rename_team(owner.id, team.id, "Gamma").await.unwrap();
        assert_eq!(renamed.name, "Gamma");

        svc.delete_team(owner.id, team.id).await.unwrap();
        assert!(svc.list_teams(owner.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn personal_team_cannot_be_deleted() {
        let repos = testing::repos().await;
        let owner = testing::user(repos.as_ref(), "owner@mail.com", false).await;
        let personal = repos
            .teams()
            .create(NewTeam {
                name: "test".into(),
                is_personal: true,
                user_id: owner.id,
            })
            .await
            .unwrap();
        let svc = TeamService::new(repos);

        let err = svc.delete_team(owner.id, personal.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn missing_team_is_not_found() {
        let repos = testing::repos().await;
        let owner = testing::user(repos.as_ref(), "owner@mail.com", false).await;
        let svc = TeamService::new(repos);

        let err = svc.rename_team(owner.id, 404, "x").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
