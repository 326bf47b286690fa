use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::resources::models::Resource;

/// Query parameters for the resource listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ResourceListQuery {
    /// Maximum number of resources returned (default 50, max 100)
    pub limit: Option<i64>,
}

/// Request DTO for a partial resource update; every field is optional but
/// at least one must be present.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateResourceDto {
    pub status: Option<String>,
    pub quantity: Option<i32>,
    pub unit: Option<String>,
    pub is_available: Option<bool>,
    pub notes: Option<String>,
    pub updated_by: Option<String>,
}

impl UpdateResourceDto {
    pub fn has_changes(&self) -> bool {
        self.status.is_some()
            || self.quantity.is_some()
            || self.unit.is_some()
            || self.is_available.is_some()
            || self.notes.is_some()
            || self.updated_by.is_some()
    }
}

/// Response DTO for a resource
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ResourceResponseDto {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub status: String,
    pub quantity: Option<i32>,
    pub unit: Option<String>,
    pub is_available: bool,
    pub notes: Option<String>,
    pub last_updated: DateTime<Utc>,
    pub updated_by: Option<String>,
}

impl From<Resource> for ResourceResponseDto {
    fn from(r: Resource) -> Self {
        Self {
            id: r.id,
            name: r.name,
            category: r.category,
            status: r.status,
            quantity: r.quantity,
            unit: r.unit,
            is_available: r.is_available,
            notes: r.notes,
            last_updated: r.last_updated,
            updated_by: r.updated_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_changes() {
        let empty = UpdateResourceDto {
            status: None,
            quantity: None,
            unit: None,
            is_available: None,
            notes: None,
            updated_by: None,
        };
        assert!(!empty.has_changes());

        let update = UpdateResourceDto {
            quantity: Some(12),
            ..empty
        };
        assert!(update.has_changes());
    }
}
