//! Team REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{TeamRequest, TeamResponse};
use crate::application::TeamService;
use crate::interfaces::http::common::{domain_error, ApiError, ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[derive(Clone)]
pub struct TeamHandlerState {
    pub teams: Arc<TeamService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/teams",
    tag = "Teams",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Teams owned by the caller", body = ApiResponse<Vec<TeamResponse>>)
    )
)]
pub async fn list_teams(
    State(state): State<TeamHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Vec<TeamResponse>> {
    let teams = state.teams.list_teams(user.user_id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        teams.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/teams",
    tag = "Teams",
    security(("bearer_auth" = [])),
    request_body = TeamRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<TeamResponse>),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_team(
    State(state): State<TeamHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<TeamRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TeamResponse>>), ApiError> {
    let team = state
        .teams
        .create_team(user.user_id, &request.name)
        .await
        .map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(team.into()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/teams/{id}",
    tag = "Teams",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Team ID")),
    request_body = TeamRequest,
    responses(
        (status = 200, description = "Renamed", body = ApiResponse<TeamResponse>),
        (status = 403, description = "Team belongs to another user"),
        (status = 404, description = "Not found")
    )
)]
pub async fn rename_team(
    State(state): State<TeamHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<TeamRequest>,
) -> ApiResult<TeamResponse> {
    let team = state
        .teams
        .rename_team(user.user_id, id, &request.name)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(team.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/teams/{id}",
    tag = "Teams",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Personal team"),
        (status = 403, description = "Team belongs to another user"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_team(
    State(state): State<TeamHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<()> {
    state
        .teams
        .delete_team(user.user_id, id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(())))
}
