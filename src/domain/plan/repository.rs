//! Plan repository interface

use async_trait::async_trait;

use super::model::{NewPlan, Plan};
use crate::domain::DomainResult;

#[async_trait]
pub trait PlanRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Plan>>;
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Plan>>;
    /// All plans whose name is in `names`, in no particular order
    async fn find_by_names(&self, names: &[&str]) -> DomainResult<Vec<Plan>>;
    async fn find_all(&self) -> DomainResult<Vec<Plan>>;
    async fn create(&self, plan: NewPlan) -> DomainResult<Plan>;
    async fn update(&self, plan: Plan) -> DomainResult<Plan>;
}
