use async_trait::async_trait;

use super::{NewUser, User};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;
    async fn count(&self) -> DomainResult<u64>;
    async fn create(&self, user: NewUser) -> DomainResult<User>;
    /// Inserts the user and a personal team named after them atomically.
    async fn create_with_personal_team(&self, user: NewUser) -> DomainResult<User>;
    async fn update_password(&self, id: i32, password_hash: &str) -> DomainResult<()>;
}
