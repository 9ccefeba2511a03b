//! Plan REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{PlanRequest, PlanResponse, UpgradePriceQuery, UpgradePriceResponse};
use crate::application::PlanService;
use crate::interfaces::http::common::{domain_error, ApiError, ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[derive(Clone)]
pub struct PlanHandlerState {
    pub plans: Arc<PlanService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/plans",
    tag = "Plans",
    responses(
        (status = 200, description = "All plans ordered by name", body = ApiResponse<Vec<PlanResponse>>)
    )
)]
pub async fn list_plans(State(state): State<PlanHandlerState>) -> ApiResult<Vec<PlanResponse>> {
    let plans = state.plans.list_plans().await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        plans.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/plans",
    tag = "Plans",
    security(("bearer_auth" = [])),
    request_body = PlanRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<PlanResponse>),
        (status = 403, description = "Caller is not an administrator"),
        (status = 409, description = "Plan name already taken"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_plan(
    State(state): State<PlanHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<PlanRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PlanResponse>>), ApiError> {
    let plan = state
        .plans
        .create_plan(user.user_id, &request.name, request.price)
        .await
        .map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(plan.into()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/plans/{id}",
    tag = "Plans",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Plan ID")),
    request_body = PlanRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<PlanResponse>),
        (status = 403, description = "Caller is not an administrator"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Plan name already taken")
    )
)]
pub async fn update_plan(
    State(state): State<PlanHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<PlanRequest>,
) -> ApiResult<PlanResponse> {
    let plan = state
        .plans
        .update_plan(user.user_id, id, &request.name, request.price)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(plan.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/plans/upgrade-price",
    tag = "Plans",
    params(UpgradePriceQuery),
    responses(
        (status = 200, description = "Prorated price", body = ApiResponse<UpgradePriceResponse>),
        (status = 404, description = "Unknown plan name")
    )
)]
pub async fn upgrade_price(
    State(state): State<PlanHandlerState>,
    Query(query): Query<UpgradePriceQuery>,
) -> ApiResult<UpgradePriceResponse> {
    let quote = state
        .plans
        .upgrade_price(&query.current_plan, &query.target_plan, query.remaining_days)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(quote.into())))
}
