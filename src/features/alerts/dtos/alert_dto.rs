use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::alerts::models::Alert;
use crate::features::incidents::models::{IncidentCategory, IncidentStatus, Severity};

/// Query parameters for the public alert feed
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AlertListQuery {
    /// Maximum number of alerts returned (default 20, max 100)
    pub limit: Option<i64>,
}

/// Response DTO for a public alert
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AlertResponseDto {
    pub id: Uuid,
    pub title: String,
    pub category: IncidentCategory,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub location: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<Alert> for AlertResponseDto {
    fn from(a: Alert) -> Self {
        Self {
            id: a.id,
            title: a.title,
            category: a.category,
            severity: a.severity,
            status: a.status,
            location: a.location,
            description: a.description,
            created_at: a.created_at,
        }
    }
}
