// ============================================================================
// Groups API - Group Handlers
// File: crates/groups-api/src/handlers/groups.rs
// ============================================================================
//! Group CRUD handlers under `/api/groups`

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::dto::{GroupRequest, GroupResponse};
use crate::error::ApiError;
use crate::extract::{GroupIdPath, ValidatedJson};
use crate::response::ApiResponse;
use crate::state::DynGroupService;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Create group - POST /api/groups
pub async fn create_group(
    State(service): State<Arc<DynGroupService>>,
    ValidatedJson(payload): ValidatedJson<GroupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<GroupResponse>>), ApiError> {
    let group = service.create(payload.name()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            GroupResponse::from(group),
            "Group created successfully",
        )),
    ))
}

/// List groups - GET /api/groups
pub async fn list_groups(
    State(service): State<Arc<DynGroupService>>,
) -> ApiResult<Vec<GroupResponse>> {
    let groups = service.get_all().await?;
    let data = groups.into_iter().map(GroupResponse::from).collect();
    Ok(Json(ApiResponse::success_with_message(data, "Groups retrieved successfully")))
}

/// Get group - GET /api/groups/{id}
pub async fn get_group(
    State(service): State<Arc<DynGroupService>>,
    GroupIdPath(id): GroupIdPath,
) -> ApiResult<GroupResponse> {
    let group = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success_with_message(group.into(), "Group retrieved successfully")))
}

/// Rename group - PUT /api/groups/{id}
pub async fn update_group(
    State(service): State<Arc<DynGroupService>>,
    GroupIdPath(id): GroupIdPath,
    ValidatedJson(payload): ValidatedJson<GroupRequest>,
) -> ApiResult<GroupResponse> {
    let group = service.update(id, payload.name()).await?;
    Ok(Json(ApiResponse::success_with_message(group.into(), "Group updated successfully")))
}

/// Soft delete group - DELETE /api/groups/{id}
pub async fn delete_group(
    State(service): State<Arc<DynGroupService>>,
    GroupIdPath(id): GroupIdPath,
) -> ApiResult<()> {
    service.soft_delete(id).await?;
    Ok(Json(ApiResponse::empty("Group deleted successfully")))
}

/// Toggle group status - PATCH /api/groups/{id}/toggle-status
pub async fn toggle_group_status(
    State(service): State<Arc<DynGroupService>>,
    GroupIdPath(id): GroupIdPath,
) -> ApiResult<GroupResponse> {
    let group = service.toggle_status(id).await?;
    Ok(Json(ApiResponse::success_with_message(
        group.into(),
        "Group status updated successfully",
    )))
}
