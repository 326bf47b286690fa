use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a trackable campus resource
#[derive(Debug, Clone, FromRow)]
pub struct Resource {
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
