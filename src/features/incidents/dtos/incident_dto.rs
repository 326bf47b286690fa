use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::alerts::models::derived_title;
use crate::features::incidents::models::{
    Incident, IncidentCategory, IncidentStats, IncidentStatus, Severity,
};

/// Request DTO for reporting an incident
///
/// category and severity arrive as plain strings: the category is validated
/// against the closed enum by the coordinator (so the caller gets a precise
/// message), and unknown severities normalize to yellow instead of failing.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateIncidentDto {
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "contact_info is required"))]
    pub contact_info: String,

    pub severity: Option<String>,
}

/// Request DTO for updating an incident's status
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateIncidentStatusDto {
    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,
}

/// Query parameters for the incident listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct IncidentListQuery {
    /// Filter by status (one of the five recognized labels)
    pub status: Option<String>,
    /// Filter by category
    pub category: Option<String>,
    /// Maximum number of incidents returned (default 50, max 100)
    pub limit: Option<i64>,
}

/// Response DTO for a reported incident
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IncidentResponseDto {
    pub id: Uuid,
    pub title: String,
    pub category: IncidentCategory,
    pub location: String,
    pub description: String,
    pub contact_info: String,
    pub status: IncidentStatus,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Incident> for IncidentResponseDto {
    fn from(i: Incident) -> Self {
        Self {
            id: i.id,
            title: derived_title(i.category, &i.location),
            category: i.category,
            location: i.location,
            description: i.description,
            contact_info: i.contact_info,
            status: i.status,
            severity: i.severity,
            created_at: i.created_at,
            updated_at: i.updated_at,
        }
    }
}

/// Aggregate counters shown on the dashboard header
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IncidentStatsDto {
    pub total: i64,
    pub urgent: i64,
    pub active: i64,
    pub resolved_today: i64,
}

impl From<IncidentStats> for IncidentStatsDto {
    fn from(s: IncidentStats) -> Self {
        Self {
            total: s.total,
            urgent: s.urgent,
            active: s.active,
            resolved_today: s.resolved_today,
        }
    }
}

/// Response DTO for the incident listing (rows + counters)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IncidentListDto {
    pub issues: Vec<IncidentResponseDto>,
    pub stats: IncidentStatsDto,
}

/// Response DTO for a successful submission
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IncidentCreatedDto {
    pub incident_id: Uuid,
}

/// Response DTO for a status update
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusChangeDto {
    pub incident_id: Uuid,
    pub old_status: IncidentStatus,
    pub new_status: IncidentStatus,
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dto_rejects_empty_required_fields() {
        let dto = CreateIncidentDto {
            category: "power".to_string(),
            location: String::new(),
            description: "Transformer sparked near gate".to_string(),
            contact_info: "student@x.edu".to_string(),
            severity: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_dto_accepts_missing_severity() {
        let dto = CreateIncidentDto {
            category: "power".to_string(),
            location: "Hostel 2".to_string(),
            description: "Transformer sparked near gate".to_string(),
            contact_info: "student@x.edu".to_string(),
            severity: None,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_response_dto_derives_title() {
        let incident = Incident {
            id: Uuid::nil(),
            category: IncidentCategory::Power,
            location: "Hostel 2".to_string(),
            description: "Transformer sparked near gate".to_string(),
            contact_info: "student@x.edu".to_string(),
            status: IncidentStatus::Reported,
            severity: Severity::Yellow,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let dto = IncidentResponseDto::from(incident);
        assert_eq!(dto.title, "Power Issue - Hostel 2");
    }
}
