use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::features::incidents::handlers::{self, IncidentState};
use crate::features::incidents::services::{IncidentService, LifecycleService};

/// Public incident routes: submission and the dashboard listing.
pub fn public_routes(
    lifecycle: Arc<LifecycleService>,
    incident_service: Arc<IncidentService>,
) -> Router {
    let state = IncidentState {
        lifecycle,
        incident_service,
    };

    Router::new()
        .route("/api/incidents", post(handlers::submit_incident))
        .route("/api/incidents", get(handlers::list_incidents))
        .with_state(state)
}

/// Admin incident routes (caller applies the admin gate middleware).
pub fn admin_routes(
    lifecycle: Arc<LifecycleService>,
    incident_service: Arc<IncidentService>,
) -> Router {
    let state = IncidentState {
        lifecycle,
        incident_service,
    };

    Router::new()
        .route(
            "/api/incidents/{id}/status",
            patch(handlers::update_incident_status),
        )
        .route("/api/incidents/{id}", delete(handlers::delete_incident))
        .with_state(state)
}
