use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::incidents::models::{
    CreateIncident, Incident, IncidentCategory, IncidentStats, IncidentStatus, Severity,
};

const INCIDENT_COLUMNS: &str =
    "id, category, location, description, contact_info, status, severity, created_at, updated_at";

/// Store adapter for incident rows
pub struct IncidentService {
    pool: PgPool,
}

impl IncidentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new incident; status always starts as Reported.
    pub async fn create(&self, data: &CreateIncident) -> Result<Incident> {
        let incident = sqlx::query_as::<_, Incident>(&format!(
            r#"
            INSERT INTO incidents (category, location, description, contact_info, severity, status)
            VALUES ($1, $2, $3, $4, $5, 'Reported')
            RETURNING {INCIDENT_COLUMNS}
            "#
        ))
        .bind(data.category)
        .bind(&data.location)
        .bind(&data.description)
        .bind(&data.contact_info)
        .bind(data.severity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create incident: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Created incident: {} category={} location={:?}",
            incident.id,
            incident.category,
            incident.location
        );

        Ok(incident)
    }

    /// Get incident by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Incident> {
        sqlx::query_as::<_, Incident>(&format!(
            r#"
            SELECT {INCIDENT_COLUMNS}
            FROM incidents
            WHERE id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get incident: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Incident {} not found", id)))
    }

    /// Write a new status together with its recomputed severity.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: IncidentStatus,
        severity: Severity,
    ) -> Result<Incident> {
        sqlx::query_as::<_, Incident>(&format!(
            r#"
            UPDATE incidents
            SET status = $2, severity = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING {INCIDENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status)
        .bind(severity)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update incident status: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Incident {} not found", id)))
    }

    /// Delete an incident row
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM incidents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete incident: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Incident {} not found", id)));
        }

        tracing::info!("Deleted incident: {}", id);
        Ok(())
    }

    /// List incidents, newest first, optionally filtered by status and category.
    pub async fn list(
        &self,
        status: Option<IncidentStatus>,
        category: Option<IncidentCategory>,
        limit: i64,
    ) -> Result<Vec<Incident>> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {INCIDENT_COLUMNS} FROM incidents WHERE 1=1"
        ));

        if let Some(status) = status {
            query.push(" AND status = ").push_bind(status);
        }
        if let Some(category) = category {
            query.push(" AND category = ").push_bind(category);
        }

        query.push(" ORDER BY created_at DESC LIMIT ").push_bind(limit);

        query
            .build_query_as::<Incident>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list incidents: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Aggregate counters for the dashboard header.
    ///
    /// resolved_today counts resolved incidents *created* on the current
    /// calendar day, not resolved on it; see DESIGN.md.
    pub async fn stats(&self) -> Result<IncidentStats> {
        sqlx::query_as::<_, IncidentStats>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE severity = 'red') AS urgent,
                COUNT(*) FILTER (WHERE status <> 'Resolved') AS active,
                COUNT(*) FILTER (WHERE status = 'Resolved' AND created_at::date = CURRENT_DATE)
                    AS resolved_today
            FROM incidents
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get incident stats: {:?}", e);
            AppError::Database(e)
        })
    }
}
