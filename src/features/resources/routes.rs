use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::resources::handlers;
use crate::features::resources::services::ResourceService;

/// Public resource routes
pub fn public_routes(resource_service: Arc<ResourceService>) -> Router {
    Router::new()
        .route("/api/resources", get(handlers::list_resources))
        .with_state(resource_service)
}

/// Admin resource routes (caller applies the admin gate middleware).
pub fn admin_routes(resource_service: Arc<ResourceService>) -> Router {
    Router::new()
        .route("/api/resources/{id}", patch(handlers::update_resource))
        .with_state(resource_service)
}
