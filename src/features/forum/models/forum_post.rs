use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for forum post
///
/// `is_approved = false` is the pending state; rejection deletes the row,
/// it is never stored.
#[derive(Debug, Clone, FromRow)]
pub struct ForumPost {
    pub id: Uuid,
    pub user_name: String,
    pub message: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new forum post
#[derive(Debug)]
pub struct CreateForumPost {
    pub user_name: String,
    pub message: String,
}
