use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::forum::models::ForumPost;
use crate::shared::timefmt::relative_age;

/// Request DTO for submitting a forum post
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePostDto {
    #[validate(length(min = 1, message = "user_name is required"))]
    pub user_name: String,

    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

/// Request DTO for an admin disposition
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DispositionDto {
    pub approve: bool,
}

/// Response DTO for an approved post on the public feed
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicPostDto {
    pub author: String,
    pub text: String,
    /// Relative-age label ("Just now", "5 min ago", ...)
    pub time: String,
}

impl PublicPostDto {
    pub fn from_post(post: ForumPost, now: DateTime<Utc>) -> Self {
        Self {
            author: post.user_name,
            text: post.message,
            time: relative_age(post.created_at, now),
        }
    }
}

/// Response DTO for a post awaiting moderation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PendingPostDto {
    pub id: Uuid,
    pub user_name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ForumPost> for PendingPostDto {
    fn from(p: ForumPost) -> Self {
        Self {
            id: p.id,
            user_name: p.user_name,
            message: p.message,
            created_at: p.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_post_dto_requires_both_fields() {
        let dto = CreatePostDto {
            user_name: "sam".to_string(),
            message: String::new(),
        };
        assert!(dto.validate().is_err());

        let dto = CreatePostDto {
            user_name: String::new(),
            message: "anyone else without water in Block C?".to_string(),
        };
        assert!(dto.validate().is_err());

        let dto = CreatePostDto {
            user_name: "sam".to_string(),
            message: "anyone else without water in Block C?".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_public_post_dto_carries_relative_age() {
        let now: DateTime<Utc> = "2025-08-01T12:00:00Z".parse().unwrap();
        let post = ForumPost {
            id: Uuid::nil(),
            user_name: "sam".to_string(),
            message: "water is back in Block C".to_string(),
            is_approved: true,
            created_at: now - chrono::Duration::minutes(5),
        };

        let dto = PublicPostDto::from_post(post, now);
        assert_eq!(dto.author, "sam");
        assert_eq!(dto.time, "5 min ago");
    }
}
