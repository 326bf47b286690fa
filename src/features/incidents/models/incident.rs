use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Incident category enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "incident_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum IncidentCategory {
    Power,
    Water,
    Medical,
    Food,
    Transport,
    Other,
}

impl IncidentCategory {
    /// Parse the lowercase wire value; anything else is outside the closed enum.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "power" => Some(IncidentCategory::Power),
            "water" => Some(IncidentCategory::Water),
            "medical" => Some(IncidentCategory::Medical),
            "food" => Some(IncidentCategory::Food),
            "transport" => Some(IncidentCategory::Transport),
            "other" => Some(IncidentCategory::Other),
            _ => None,
        }
    }

    /// Capitalized label used when deriving alert titles.
    pub fn label(&self) -> &'static str {
        match self {
            IncidentCategory::Power => "Power",
            IncidentCategory::Water => "Water",
            IncidentCategory::Medical => "Medical",
            IncidentCategory::Food => "Food",
            IncidentCategory::Transport => "Transport",
            IncidentCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for IncidentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncidentCategory::Power => write!(f, "power"),
            IncidentCategory::Water => write!(f, "water"),
            IncidentCategory::Medical => write!(f, "medical"),
            IncidentCategory::Food => write!(f, "food"),
            IncidentCategory::Transport => write!(f, "transport"),
            IncidentCategory::Other => write!(f, "other"),
        }
    }
}

/// Incident status enum matching database enum
///
/// The wire and storage representation keeps the human-readable labels,
/// including the space in "In Progress".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "incident_status")]
pub enum IncidentStatus {
    Reported,
    Investigating,
    #[sqlx(rename = "In Progress")]
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Delayed,
}

impl IncidentStatus {
    /// Parse the wire value; anything else is outside the closed enum.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Reported" => Some(IncidentStatus::Reported),
            "Investigating" => Some(IncidentStatus::Investigating),
            "In Progress" => Some(IncidentStatus::InProgress),
            "Resolved" => Some(IncidentStatus::Resolved),
            "Delayed" => Some(IncidentStatus::Delayed),
            _ => None,
        }
    }

    /// The severity policy: the canonical tier for each status.
    ///
    /// Total over the closed enum; callers reject unknown status strings
    /// before this runs.
    pub fn severity(&self) -> Severity {
        match self {
            IncidentStatus::Reported => Severity::Yellow,
            IncidentStatus::Investigating => Severity::Red,
            IncidentStatus::InProgress => Severity::Red,
            IncidentStatus::Resolved => Severity::Green,
            IncidentStatus::Delayed => Severity::Yellow,
        }
    }
}

impl std::fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncidentStatus::Reported => write!(f, "Reported"),
            IncidentStatus::Investigating => write!(f, "Investigating"),
            IncidentStatus::InProgress => write!(f, "In Progress"),
            IncidentStatus::Resolved => write!(f, "Resolved"),
            IncidentStatus::Delayed => write!(f, "Delayed"),
        }
    }
}

/// Severity tier enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "severity_tier", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Red,
    Yellow,
    Green,
}

impl Severity {
    /// Lenient parse for caller-supplied initial severities: unknown or
    /// absent values fall back to yellow rather than rejecting the report.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value {
            Some("red") => Severity::Red,
            Some("yellow") => Severity::Yellow,
            Some("green") => Severity::Green,
            _ => Severity::Yellow,
        }
    }

    /// Sort rank for public feeds: red before yellow before green.
    pub fn rank(&self) -> i32 {
        match self {
            Severity::Red => 1,
            Severity::Yellow => 2,
            Severity::Green => 3,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Red => write!(f, "red"),
            Severity::Yellow => write!(f, "yellow"),
            Severity::Green => write!(f, "green"),
        }
    }
}

/// Database model for incident
#[derive(Debug, Clone, FromRow)]
pub struct Incident {
    pub id: Uuid,
    pub category: IncidentCategory,
    pub location: String,
    pub description: String,
    pub contact_info: String,
    pub status: IncidentStatus,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new incident
#[derive(Debug)]
pub struct CreateIncident {
    pub category: IncidentCategory,
    pub location: String,
    pub description: String,
    pub contact_info: String,
    pub severity: Severity,
}

/// Aggregate counters for the dashboard header
#[derive(Debug, Clone, Copy, FromRow)]
pub struct IncidentStats {
    pub total: i64,
    pub urgent: i64,
    pub active: i64,
    pub resolved_today: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_policy_mapping() {
        assert_eq!(IncidentStatus::Reported.severity(), Severity::Yellow);
        assert_eq!(IncidentStatus::Investigating.severity(), Severity::Red);
        assert_eq!(IncidentStatus::InProgress.severity(), Severity::Red);
        assert_eq!(IncidentStatus::Resolved.severity(), Severity::Green);
        assert_eq!(IncidentStatus::Delayed.severity(), Severity::Yellow);
    }

    #[test]
    fn test_status_parse_accepts_only_the_five_values() {
        assert_eq!(
            IncidentStatus::parse("In Progress"),
            Some(IncidentStatus::InProgress)
        );
        assert_eq!(IncidentStatus::parse("Reported"), Some(IncidentStatus::Reported));
        assert_eq!(IncidentStatus::parse("in progress"), None);
        assert_eq!(IncidentStatus::parse("Closed"), None);
        assert_eq!(IncidentStatus::parse(""), None);
    }

    #[test]
    fn test_status_serde_uses_display_labels() {
        let json = serde_json::to_string(&IncidentStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");

        let parsed: IncidentStatus = serde_json::from_str("\"Delayed\"").unwrap();
        assert_eq!(parsed, IncidentStatus::Delayed);
    }

    #[test]
    fn test_category_parse_is_closed() {
        assert_eq!(IncidentCategory::parse("water"), Some(IncidentCategory::Water));
        assert_eq!(IncidentCategory::parse("Water"), None);
        assert_eq!(IncidentCategory::parse("gas"), None);
    }

    #[test]
    fn test_category_labels_are_capitalized() {
        assert_eq!(IncidentCategory::Power.label(), "Power");
        assert_eq!(IncidentCategory::Transport.label(), "Transport");
    }

    #[test]
    fn test_severity_lenient_parse_defaults_to_yellow() {
        assert_eq!(Severity::parse_lenient(None), Severity::Yellow);
        assert_eq!(Severity::parse_lenient(Some("purple")), Severity::Yellow);
        assert_eq!(Severity::parse_lenient(Some("")), Severity::Yellow);
        assert_eq!(Severity::parse_lenient(Some("red")), Severity::Red);
        assert_eq!(Severity::parse_lenient(Some("green")), Severity::Green);
    }

    #[test]
    fn test_severity_rank_orders_red_first() {
        assert!(Severity::Red.rank() < Severity::Yellow.rank());
        assert!(Severity::Yellow.rank() < Severity::Green.rank());
    }
}
