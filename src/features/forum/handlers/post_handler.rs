use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::AdminContext;
use crate::features::forum::dtos::{CreatePostDto, DispositionDto, PendingPostDto, PublicPostDto};
use crate::features::forum::services::ForumService;
use crate::features::incidents::services::LifecycleService;
use crate::shared::types::{ApiResponse, Meta};

/// State for forum handlers
#[derive(Clone)]
pub struct ForumState {
    pub lifecycle: Arc<LifecycleService>,
    pub forum_service: Arc<ForumService>,
}

/// Submit a forum post for moderation
#[utoipa::path(
    post,
    path = "/api/forum/posts",
    request_body = CreatePostDto,
    responses(
        (status = 200, description = "Post queued for admin approval"),
        (status = 400, description = "Validation failure or blocked content")
    ),
    tag = "forum"
)]
pub async fn submit_post(
    State(state): State<ForumState>,
    AppJson(dto): AppJson<CreatePostDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(format!("Invalid request: {}", e)))?;

    state
        .lifecycle
        .submit_post(&dto.user_name, &dto.message)
        .await?;

    Ok(Json(ApiResponse::success(
        None,
        Some(
            "Post submitted successfully! It will appear in the community after admin approval."
                .to_string(),
        ),
        None,
    )))
}

/// Public feed of approved posts
#[utoipa::path(
    get,
    path = "/api/forum/posts",
    responses(
        (status = 200, description = "Approved posts, newest first", body = ApiResponse<Vec<PublicPostDto>>)
    ),
    tag = "forum"
)]
pub async fn list_posts(
    State(state): State<ForumState>,
) -> Result<Json<ApiResponse<Vec<PublicPostDto>>>> {
    let now = Utc::now();
    let posts = state.forum_service.list_public().await?;
    let dtos: Vec<PublicPostDto> = posts
        .into_iter()
        .map(|p| PublicPostDto::from_post(p, now))
        .collect();

    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Posts awaiting moderation (admin only)
#[utoipa::path(
    get,
    path = "/api/forum/posts/pending",
    responses(
        (status = 200, description = "Pending posts, newest first", body = ApiResponse<Vec<PendingPostDto>>),
        (status = 401, description = "Admin access required")
    ),
    security(("bearer_auth" = []), ("admin_token" = [])),
    tag = "forum"
)]
pub async fn list_pending_posts(
    _ctx: AdminContext,
    State(state): State<ForumState>,
) -> Result<Json<ApiResponse<Vec<PendingPostDto>>>> {
    let posts = state.forum_service.list_pending().await?;
    let total = posts.len() as i64;
    let dtos: Vec<PendingPostDto> = posts.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Approve or reject a pending post (admin only)
#[utoipa::path(
    post,
    path = "/api/forum/posts/{id}/disposition",
    params(
        ("id" = Uuid, Path, description = "Post ID")
    ),
    request_body = DispositionDto,
    responses(
        (status = 200, description = "Post approved or removed"),
        (status = 401, description = "Admin access required"),
        (status = 404, description = "Post not found or already processed")
    ),
    security(("bearer_auth" = []), ("admin_token" = [])),
    tag = "forum"
)]
pub async fn disposition_post(
    ctx: AdminContext,
    State(state): State<ForumState>,
    Path(id): Path<uuid::Uuid>,
    AppJson(dto): AppJson<DispositionDto>,
) -> Result<Json<ApiResponse<()>>> {
    state.lifecycle.disposition_post(id, dto.approve).await?;

    tracing::info!(
        "Forum post {} {} by {}",
        id,
        if dto.approve { "approved" } else { "rejected" },
        ctx.subject
    );

    let message = if dto.approve {
        "Forum post approved successfully! It now appears in the community."
    } else {
        "Forum post rejected and removed successfully."
    };

    Ok(Json(ApiResponse::success(None, Some(message.to_string()), None)))
}
