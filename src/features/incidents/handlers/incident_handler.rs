use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::AdminContext;
use crate::features::incidents::dtos::{
    CreateIncidentDto, IncidentCreatedDto, IncidentListDto, IncidentListQuery, IncidentResponseDto,
    StatusChangeDto, UpdateIncidentStatusDto,
};
use crate::features::incidents::models::{IncidentCategory, IncidentStatus};
use crate::features::incidents::services::{IncidentService, LifecycleService};
use crate::shared::constants::{clamp_limit, DEFAULT_INCIDENT_LIMIT};
use crate::shared::types::ApiResponse;

/// State for incident handlers
#[derive(Clone)]
pub struct IncidentState {
    pub lifecycle: Arc<LifecycleService>,
    pub incident_service: Arc<IncidentService>,
}

/// Report a new incident
#[utoipa::path(
    post,
    path = "/api/incidents",
    request_body = CreateIncidentDto,
    responses(
        (status = 200, description = "Incident reported and published", body = ApiResponse<IncidentCreatedDto>),
        (status = 400, description = "Validation failure or blocked content")
    ),
    tag = "incidents"
)]
pub async fn submit_incident(
    State(state): State<IncidentState>,
    AppJson(dto): AppJson<CreateIncidentDto>,
) -> Result<Json<ApiResponse<IncidentCreatedDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(format!("Invalid request: {}", e)))?;

    let incident = state.lifecycle.submit_incident(&dto).await?;

    Ok(Json(ApiResponse::success(
        Some(IncidentCreatedDto {
            incident_id: incident.id,
        }),
        Some("Issue reported successfully! It now appears on the dashboard.".to_string()),
        None,
    )))
}

/// List incidents with dashboard counters
#[utoipa::path(
    get,
    path = "/api/incidents",
    params(IncidentListQuery),
    responses(
        (status = 200, description = "Incidents, newest first, with aggregate stats", body = ApiResponse<IncidentListDto>)
    ),
    tag = "incidents"
)]
pub async fn list_incidents(
    State(state): State<IncidentState>,
    Query(query): Query<IncidentListQuery>,
) -> Result<Json<ApiResponse<IncidentListDto>>> {
    // Empty-string filters are treated the same as absent ones
    let status = match query.status.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => Some(
            IncidentStatus::parse(s)
                .ok_or_else(|| AppError::Validation("Invalid status".to_string()))?,
        ),
        None => None,
    };
    let category = match query.category.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => Some(
            IncidentCategory::parse(s)
                .ok_or_else(|| AppError::Validation("Invalid category".to_string()))?,
        ),
        None => None,
    };
    let limit = clamp_limit(query.limit, DEFAULT_INCIDENT_LIMIT);

    let incidents = state.incident_service.list(status, category, limit).await?;
    let stats = state.incident_service.stats().await?;

    let dto = IncidentListDto {
        issues: incidents.into_iter().map(IncidentResponseDto::from).collect(),
        stats: stats.into(),
    };

    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}

/// Update an incident's status (admin only)
#[utoipa::path(
    patch,
    path = "/api/incidents/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Incident ID")
    ),
    request_body = UpdateIncidentStatusDto,
    responses(
        (status = 200, description = "Status updated and alert synced", body = ApiResponse<StatusChangeDto>),
        (status = 401, description = "Admin access required"),
        (status = 404, description = "Incident not found")
    ),
    security(("bearer_auth" = []), ("admin_token" = [])),
    tag = "incidents"
)]
pub async fn update_incident_status(
    ctx: AdminContext,
    State(state): State<IncidentState>,
    Path(id): Path<uuid::Uuid>,
    AppJson(dto): AppJson<UpdateIncidentStatusDto>,
) -> Result<Json<ApiResponse<StatusChangeDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(format!("Invalid request: {}", e)))?;

    let change = state.lifecycle.update_incident_status(id, &dto).await?;

    tracing::info!(
        "Incident {} status {} -> {} by {}",
        id,
        change.old_status,
        change.new_status,
        ctx.subject
    );

    Ok(Json(ApiResponse::success(
        Some(StatusChangeDto {
            incident_id: change.incident.id,
            old_status: change.old_status,
            new_status: change.new_status,
            severity: change.incident.severity,
        }),
        Some("Issue status updated successfully".to_string()),
        None,
    )))
}

/// Delete an incident and its projected alerts (admin only)
#[utoipa::path(
    delete,
    path = "/api/incidents/{id}",
    params(
        ("id" = Uuid, Path, description = "Incident ID")
    ),
    responses(
        (status = 200, description = "Incident and alerts removed"),
        (status = 401, description = "Admin access required"),
        (status = 404, description = "Incident not found")
    ),
    security(("bearer_auth" = []), ("admin_token" = [])),
    tag = "incidents"
)]
pub async fn delete_incident(
    ctx: AdminContext,
    State(state): State<IncidentState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    state.lifecycle.delete_incident(id).await?;

    tracing::info!("Incident {} deleted by {}", id, ctx.subject);

    Ok(Json(ApiResponse::success(
        None,
        Some("Issue deleted successfully".to_string()),
        None,
    )))
}
