//! Subscription REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Utc;

use super::dto::{QuoteQuery, SubscribeRequest, SubscriptionDetailResponse, SubscriptionResponse};
use crate::application::SubscriptionService;
use crate::interfaces::http::common::{domain_error, ApiError, ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::modules::plans::UpgradePriceResponse;

#[derive(Clone)]
pub struct SubscriptionHandlerState {
    pub subscriptions: Arc<SubscriptionService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/subscriptions",
    tag = "Subscriptions",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's subscriptions, newest first", body = ApiResponse<Vec<SubscriptionResponse>>)
    )
)]
pub async fn list_subscriptions(
    State(state): State<SubscriptionHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Vec<SubscriptionResponse>> {
    let subscriptions = state
        .subscriptions
        .list_subscriptions(user.user_id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        subscriptions.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/subscriptions",
    tag = "Subscriptions",
    security(("bearer_auth" = [])),
    request_body = SubscribeRequest,
    responses(
        (status = 201, description = "Subscribed for one cycle", body = ApiResponse<SubscriptionResponse>),
        (status = 404, description = "Unknown plan")
    )
)]
pub async fn subscribe(
    State(state): State<SubscriptionHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<SubscribeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SubscriptionResponse>>), ApiError> {
    let created = state
        .subscriptions
        .subscribe(user.user_id, &request.plan, Utc::now())
        .await
        .map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created.into()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/subscriptions/{id}",
    tag = "Subscriptions",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Subscription ID")),
    responses(
        (status = 200, description = "Subscription with orders and activations", body = ApiResponse<SubscriptionDetailResponse>),
        (status = 403, description = "Owned by another user"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_subscription(
    State(state): State<SubscriptionHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<SubscriptionDetailResponse> {
    let details = state
        .subscriptions
        .get_subscription(user.user_id, id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(details.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/subscriptions/{id}/upgrade-price",
    tag = "Subscriptions",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Subscription ID"), QuoteQuery),
    responses(
        (status = 200, description = "Prorated price for the rest of this cycle", body = ApiResponse<UpgradePriceResponse>),
        (status = 403, description = "Owned by another user"),
        (status = 404, description = "Unknown subscription or plan")
    )
)]
pub async fn quote_upgrade(
    State(state): State<SubscriptionHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    Query(query): Query<QuoteQuery>,
) -> ApiResult<UpgradePriceResponse> {
    let quote = state
        .subscriptions
        .quote_upgrade(user.user_id, id, &query.target_plan, Utc::now())
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(quote.into())))
}
