use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::incidents::models::{IncidentCategory, IncidentStatus, Severity};

/// Database model for alert
///
/// `incident_id` links the projection to its source incident; curated
/// notices that are not tied to a report leave it NULL.
#[derive(Debug, Clone, FromRow)]
pub struct Alert {
    pub id: Uuid,
    pub incident_id: Option<Uuid>,
    pub title: String,
    pub category: IncidentCategory,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub location: String,
    pub description: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a standalone curated notice
#[derive(Debug)]
pub struct CreateNotice {
    pub title: String,
    pub category: IncidentCategory,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub location: String,
    pub description: String,
}

/// Derive the public title of an incident-sourced alert.
pub fn derived_title(category: IncidentCategory, location: &str) -> String {
    format!("{} Issue - {}", category.label(), location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_title_capitalizes_category() {
        assert_eq!(
            derived_title(IncidentCategory::Power, "Hostel 2"),
            "Power Issue - Hostel 2"
        );
        assert_eq!(
            derived_title(IncidentCategory::Water, "Block A"),
            "Water Issue - Block A"
        );
    }
}
