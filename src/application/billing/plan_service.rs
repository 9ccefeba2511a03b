//! Plan catalogue and the public upgrade-price quote

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::identity::require_admin;
use crate::domain::{upgrade_price, DomainError, DomainResult, NewPlan, Plan, RepositoryProvider};

/// Result of pricing a move from `current` to `target`
#[derive(Debug, Clone)]
pub struct UpgradeQuote {
    pub current: Plan,
    pub target: Plan,
    pub remaining_days: i32,
    /// Positive amounts are owed, negative amounts are credited
    pub price: f64,
}

impl UpgradeQuote {
    pub fn compute(current: Plan, target: Plan, remaining_days: i32) -> Self {
        let price = upgrade_price(&current, &target, remaining_days);
        Self {
            current,
            target,
            remaining_days,
            price,
        }
    }
}

pub struct PlanService {
    repos: Arc<dyn RepositoryProvider>,
}

impl PlanService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list_plans(&self) -> DomainResult<Vec<Plan>> {
        self.repos.plans().find_all().await
    }

    pub async fn create_plan(&self, actor_id: i32, name: &str, price: i32) -> DomainResult<Plan> {
        let admin = require_admin(self.repos.as_ref(), actor_id).await?;
        let plan = self
            .repos
            .plans()
            .create(NewPlan {
                name: checked_name(name)?,
                price,
            })
            .await?;

        info!(plan_id = plan.id, admin_id = admin.id, "Plan created");
        Ok(plan)
    }

    pub async fn update_plan(
        &self,
        actor_id: i32,
        plan_id: i32,
        name: &str,
        price: i32,
    ) -> DomainResult<Plan> {
        let admin = require_admin(self.repos.as_ref(), actor_id).await?;
        let plan = self
            .repos
            .plans()
            .update(Plan {
                id: plan_id,
                name: checked_name(name)?,
                price,
            })
            .await?;

        info!(plan_id, admin_id = admin.id, "Plan updated");
        Ok(plan)
    }

    /// Quote a plan change by plan names. Both names may be the same.
    pub async fn upgrade_price(
        &self,
        current_name: &str,
        target_name: &str,
        remaining_days: i32,
    ) -> DomainResult<UpgradeQuote> {
        let plans = self
            .repos
            .plans()
            .find_by_names(&[current_name, target_name])
            .await?;

        let current = pick(&plans, current_name)?;
        let target = pick(&plans, target_name)?;

        let quote = UpgradeQuote::compute(current, target, remaining_days);
        debug!(
            current = current_name,
            target = target_name,
            remaining_days,
            price = quote.price,
            "Upgrade price quoted"
        );
        Ok(quote)
    }
}

fn pick(plans: &[Plan], name: &str) -> DomainResult<Plan> {
    plans
        .iter()
        .find(|p| p.name == name)
        .cloned()
        .ok_or_else(|| DomainError::not_found("Plan", "name", name))
}

fn checked_name(name: &str) -> DomainResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::Validation("Plan name is required".into()));
    }
    Ok(name.to_string())
}
