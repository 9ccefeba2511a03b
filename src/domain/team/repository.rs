use async_trait::async_trait;

use super::{NewTeam, Team};
use crate::domain::DomainResult;

#[async_trait]
pub trait TeamRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Team>>;
    async fn find_by_owner(&self, user_id: i32) -> DomainResult<Vec<Team>>;
    async fn create(&self, team: NewTeam) -> DomainResult<Team>;
    async fn rename(&self, id: i32, name: &str) -> DomainResult<Team>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
