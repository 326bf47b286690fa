use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::alerts::models::{derived_title, Alert, CreateNotice};
use crate::features::incidents::models::{Incident, IncidentStatus};

const ALERT_COLUMNS: &str = "id, incident_id, title, category, severity, status, location, \
                             description, is_approved, created_at";

/// Maintains the public alert projection of incident rows.
pub struct AlertService {
    pool: PgPool,
}

impl AlertService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Project a freshly created incident into the public feed.
    ///
    /// Incident-sourced alerts are approved at creation: reports go public
    /// immediately, unlike forum content.
    pub async fn project_new(&self, incident: &Incident) -> Result<Alert> {
        let title = derived_title(incident.category, &incident.location);

        let alert = sqlx::query_as::<_, Alert>(&format!(
            r#"
            INSERT INTO alerts
                (incident_id, title, category, severity, status, location, description, is_approved)
            VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE)
            RETURNING {ALERT_COLUMNS}
            "#
        ))
        .bind(incident.id)
        .bind(&title)
        .bind(incident.category)
        .bind(incident.severity)
        .bind(incident.status)
        .bind(&incident.location)
        .bind(&incident.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to project alert for incident {}: {:?}", incident.id, e);
            AppError::Database(e)
        })?;

        tracing::info!("Projected alert {} for incident {}", alert.id, incident.id);
        Ok(alert)
    }

    /// Propagate an incident status change onto its projected alert.
    ///
    /// Only the status field is projected; the alert keeps the severity it
    /// was created with. Returns how many rows matched so the caller can log
    /// a missing projection.
    pub async fn sync_status(&self, incident_id: Uuid, status: IncidentStatus) -> Result<u64> {
        let result = sqlx::query("UPDATE alerts SET status = $2 WHERE incident_id = $1")
            .bind(incident_id)
            .bind(status)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to sync alert status for incident {}: {:?}", incident_id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected())
    }

    /// Remove the projected alerts of a deleted incident; returns the count.
    pub async fn remove_for_incident(&self, incident_id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM alerts WHERE incident_id = $1")
            .bind(incident_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to remove alerts for incident {}: {:?}", incident_id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected())
    }

    /// Create a standalone curated notice (not tied to any incident).
    #[allow(dead_code)]
    pub async fn create_notice(&self, data: &CreateNotice, approved: bool) -> Result<Alert> {
        sqlx::query_as::<_, Alert>(&format!(
            r#"
            INSERT INTO alerts
                (incident_id, title, category, severity, status, location, description, is_approved)
            VALUES (NULL, $1, $2, $3, $4, $5, $6, $7)
            RETURNING {ALERT_COLUMNS}
            "#
        ))
        .bind(&data.title)
        .bind(data.category)
        .bind(data.severity)
        .bind(data.status)
        .bind(&data.location)
        .bind(&data.description)
        .bind(approved)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create notice: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Approved alerts for the public feed: red first, then yellow, then
    /// green, newest first within a tier.
    pub async fn list_public(&self, limit: i64) -> Result<Vec<Alert>> {
        sqlx::query_as::<_, Alert>(&format!(
            r#"
            SELECT {ALERT_COLUMNS}
            FROM alerts
            WHERE is_approved = TRUE
            ORDER BY
                CASE severity
                    WHEN 'red' THEN 1
                    WHEN 'yellow' THEN 2
                    WHEN 'green' THEN 3
                END,
                created_at DESC
            LIMIT $1
            "#
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list alerts: {:?}", e);
            AppError::Database(e)
        })
    }
}
