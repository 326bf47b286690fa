use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::alerts::dtos::{AlertListQuery, AlertResponseDto};
use crate::features::alerts::services::AlertService;
use crate::shared::constants::{clamp_limit, DEFAULT_ALERT_LIMIT};
use crate::shared::types::ApiResponse;

/// Public alert feed, most severe first
#[utoipa::path(
    get,
    path = "/api/alerts",
    params(AlertListQuery),
    responses(
        (status = 200, description = "Approved alerts ordered by severity then recency", body = ApiResponse<Vec<AlertResponseDto>>)
    ),
    tag = "alerts"
)]
pub async fn list_alerts(
    State(service): State<Arc<AlertService>>,
    Query(query): Query<AlertListQuery>,
) -> Result<Json<ApiResponse<Vec<AlertResponseDto>>>> {
    let limit = clamp_limit(query.limit, DEFAULT_ALERT_LIMIT);

    let alerts = service.list_public(limit).await?;
    let dtos: Vec<AlertResponseDto> = alerts.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}
