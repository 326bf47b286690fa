use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::AdminContext;
use crate::features::resources::dtos::{ResourceListQuery, ResourceResponseDto, UpdateResourceDto};
use crate::features::resources::services::ResourceService;
use crate::shared::constants::{clamp_limit, DEFAULT_RESOURCE_LIMIT};
use crate::shared::types::ApiResponse;

/// List campus resources
#[utoipa::path(
    get,
    path = "/api/resources",
    params(ResourceListQuery),
    responses(
        (status = 200, description = "Resources, available first", body = ApiResponse<Vec<ResourceResponseDto>>)
    ),
    tag = "resources"
)]
pub async fn list_resources(
    State(service): State<Arc<ResourceService>>,
    Query(query): Query<ResourceListQuery>,
) -> Result<Json<ApiResponse<Vec<ResourceResponseDto>>>> {
    let limit = clamp_limit(query.limit, DEFAULT_RESOURCE_LIMIT);

    let resources = service.list(limit).await?;
    let dtos: Vec<ResourceResponseDto> = resources.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Partially update a resource (admin only)
#[utoipa::path(
    patch,
    path = "/api/resources/{id}",
    params(
        ("id" = Uuid, Path, description = "Resource ID")
    ),
    request_body = UpdateResourceDto,
    responses(
        (status = 200, description = "Resource updated", body = ApiResponse<ResourceResponseDto>),
        (status = 400, description = "No fields to update"),
        (status = 401, description = "Admin access required"),
        (status = 404, description = "Resource not found")
    ),
    security(("bearer_auth" = []), ("admin_token" = [])),
    tag = "resources"
)]
pub async fn update_resource(
    ctx: AdminContext,
    State(service): State<Arc<ResourceService>>,
    Path(id): Path<uuid::Uuid>,
    AppJson(mut dto): AppJson<UpdateResourceDto>,
) -> Result<Json<ApiResponse<ResourceResponseDto>>> {
    if !dto.has_changes() {
        return Err(AppError::Validation(
            "No valid fields provided for update".to_string(),
        ));
    }

    // Attribute the change to the authorized admin unless the caller named
    // someone explicitly
    if dto.updated_by.is_none() {
        dto.updated_by = Some(ctx.subject.clone());
    }

    let resource = service.update(id, &dto).await?;

    Ok(Json(ApiResponse::success(
        Some(resource.into()),
        Some("Resource updated successfully".to_string()),
        None,
    )))
}
