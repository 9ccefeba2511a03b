//! Subscription DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::{SubscriptionDetails, SubscriptionSummary};
use crate::domain::{Order, SubscriptionActivation};
use crate::interfaces::http::modules::plans::PlanResponse;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubscribeRequest {
    /// Plan name
    #[validate(length(min = 1, max = 64, message = "plan is required"))]
    pub plan: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubscriptionResponse {
    pub id: i32,
    pub plan: PlanResponse,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl From<SubscriptionSummary> for SubscriptionResponse {
    fn from(s: SubscriptionSummary) -> Self {
        Self {
            id: s.subscription.id,
            plan: s.plan.into(),
            start_date: s.subscription.start_date,
            end_date: s.subscription.end_date,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub activation_id: i32,
    pub amount_paid: i32,
    pub payment_date: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            activation_id: o.activation_id,
            amount_paid: o.amount_paid,
            payment_date: o.payment_date,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActivationResponse {
    pub id: i32,
    pub activation_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
}

impl From<SubscriptionActivation> for ActivationResponse {
    fn from(a: SubscriptionActivation) -> Self {
        Self {
            id: a.id,
            activation_date: a.activation_date,
            expiry_date: a.expiry_date,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubscriptionDetailResponse {
    pub id: i32,
    pub plan: PlanResponse,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub orders: Vec<OrderResponse>,
    pub activations: Vec<ActivationResponse>,
}

impl From<SubscriptionDetails> for SubscriptionDetailResponse {
    fn from(d: SubscriptionDetails) -> Self {
        Self {
            id: d.subscription.id,
            plan: d.plan.into(),
            start_date: d.subscription.start_date,
            end_date: d.subscription.end_date,
            orders: d.orders.into_iter().map(Into::into).collect(),
            activations: d.activations.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuoteQuery {
    /// Name of the plan to move to
    pub target_plan: String,
}
