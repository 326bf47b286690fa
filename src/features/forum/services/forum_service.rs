use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::forum::models::{CreateForumPost, ForumPost};
use crate::shared::constants::FORUM_PUBLIC_PAGE_SIZE;

const POST_COLUMNS: &str = "id, user_name, message, is_approved, created_at";

/// Holding queue for community posts pending admin disposition.
pub struct ForumService {
    pool: PgPool,
}

impl ForumService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new post; always starts unapproved.
    pub async fn create(&self, data: &CreateForumPost) -> Result<ForumPost> {
        let post = sqlx::query_as::<_, ForumPost>(&format!(
            r#"
            INSERT INTO forum_posts (user_name, message, is_approved)
            VALUES ($1, $2, FALSE)
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(&data.user_name)
        .bind(&data.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create forum post: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Queued forum post {} for moderation", post.id);
        Ok(post)
    }

    /// Approve or reject a pending post.
    ///
    /// Both paths only touch rows still pending, so a post can be
    /// dispositioned exactly once; a repeat attempt (or an unknown id) falls
    /// through to NotFound.
    pub async fn disposition(&self, id: Uuid, approve: bool) -> Result<()> {
        let sql = if approve {
            "UPDATE forum_posts SET is_approved = TRUE WHERE id = $1 AND is_approved = FALSE"
        } else {
            "DELETE FROM forum_posts WHERE id = $1 AND is_approved = FALSE"
        };

        let result = sqlx::query(sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to disposition forum post {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                "Post not found or already processed".to_string(),
            ));
        }

        tracing::info!(
            "Forum post {} {}",
            id,
            if approve { "approved" } else { "rejected and removed" }
        );
        Ok(())
    }

    /// Unapproved posts for admin review, newest first.
    pub async fn list_pending(&self) -> Result<Vec<ForumPost>> {
        sqlx::query_as::<_, ForumPost>(&format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM forum_posts
            WHERE is_approved = FALSE
            ORDER BY created_at DESC
            "#
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list pending posts: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Approved posts for the public feed, newest first, fixed page size.
    pub async fn list_public(&self) -> Result<Vec<ForumPost>> {
        sqlx::query_as::<_, ForumPost>(&format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM forum_posts
            WHERE is_approved = TRUE
            ORDER BY created_at DESC
            LIMIT $1
            "#
        ))
        .bind(FORUM_PUBLIC_PAGE_SIZE)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list public posts: {:?}", e);
            AppError::Database(e)
        })
    }
}
