use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::forum::handlers::{self, ForumState};
use crate::features::forum::services::ForumService;
use crate::features::incidents::services::LifecycleService;

/// Public forum routes: submission and the approved feed.
pub fn public_routes(
    lifecycle: Arc<LifecycleService>,
    forum_service: Arc<ForumService>,
) -> Router {
    let state = ForumState {
        lifecycle,
        forum_service,
    };

    Router::new()
        .route("/api/forum/posts", post(handlers::submit_post))
        .route("/api/forum/posts", get(handlers::list_posts))
        .with_state(state)
}

/// Admin forum routes (caller applies the admin gate middleware).
pub fn admin_routes(
    lifecycle: Arc<LifecycleService>,
    forum_service: Arc<ForumService>,
) -> Router {
    let state = ForumState {
        lifecycle,
        forum_service,
    };

    Router::new()
        .route("/api/forum/posts/pending", get(handlers::list_pending_posts))
        .route(
            "/api/forum/posts/{id}/disposition",
            post(handlers::disposition_post),
        )
        .with_state(state)
}
