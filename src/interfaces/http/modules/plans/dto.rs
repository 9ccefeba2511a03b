//! Plan DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::UpgradeQuote;
use crate::domain::Plan;

#[derive(Debug, Serialize, ToSchema)]
pub struct PlanResponse {
    pub id: i32,
    pub name: String,
    /// Price per 30-day cycle, smallest currency unit
    pub price: i32,
}

impl From<Plan> for PlanResponse {
    fn from(p: Plan) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
        }
    }
}

/// Body for both create and update
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PlanRequest {
    #[validate(length(min = 1, max = 64, message = "name must be 1-64 characters"))]
    pub name: String,
    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpgradePriceQuery {
    /// Name of the plan currently held
    pub current_plan: String,
    /// Name of the plan to move to
    pub target_plan: String,
    /// Days left in the current cycle, normally 0-30
    pub remaining_days: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpgradePriceResponse {
    pub current_plan: PlanResponse,
    pub target_plan: PlanResponse,
    pub remaining_days: i32,
    /// Owed when positive, credited when negative
    pub price: f64,
}

impl From<UpgradeQuote> for UpgradePriceResponse {
    fn from(q: UpgradeQuote) -> Self {
        Self {
            current_plan: q.current.into(),
            target_plan: q.target.into(),
            remaining_days: q.remaining_days,
            price: q.price,
        }
    }
}
