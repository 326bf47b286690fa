use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::resources::dtos::UpdateResourceDto;
use crate::features::resources::models::Resource;

const RESOURCE_COLUMNS: &str = "id, name, category, status, quantity, unit, is_available, notes, \
                                last_updated, updated_by";

/// Service for tracking campus resources
pub struct ResourceService {
    pool: PgPool,
}

impl ResourceService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List resources, available ones first, then by category and name.
    pub async fn list(&self, limit: i64) -> Result<Vec<Resource>> {
        sqlx::query_as::<_, Resource>(&format!(
            r#"
            SELECT {RESOURCE_COLUMNS}
            FROM resources
            ORDER BY is_available DESC, category ASC, name ASC
            LIMIT $1
            "#
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list resources: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Partial update; untouched fields keep their value, the timestamp
    /// always moves.
    pub async fn update(&self, id: Uuid, dto: &UpdateResourceDto) -> Result<Resource> {
        if !dto.has_changes() {
            return Err(AppError::Validation(
                "No valid fields provided for update".to_string(),
            ));
        }

        sqlx::query_as::<_, Resource>(&format!(
            r#"
            UPDATE resources
            SET
                status = COALESCE($2, status),
                quantity = COALESCE($3, quantity),
                unit = COALESCE($4, unit),
                is_available = COALESCE($5, is_available),
                notes = COALESCE($6, notes),
                updated_by = COALESCE($7, updated_by),
                last_updated = NOW()
            WHERE id = $1
            RETURNING {RESOURCE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&dto.status)
        .bind(dto.quantity)
        .bind(&dto.unit)
        .bind(dto.is_available)
        .bind(&dto.notes)
        .bind(&dto.updated_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update resource: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Resource {} not found", id)))
    }
}
