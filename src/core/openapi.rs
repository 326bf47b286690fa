use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::alerts::{dtos as alerts_dtos, handlers as alerts_handlers};
use crate::features::forum::{dtos as forum_dtos, handlers as forum_handlers};
use crate::features::incidents::{
    dtos as incidents_dtos, handlers as incidents_handlers, models as incidents_models,
};
use crate::features::resources::{dtos as resources_dtos, handlers as resources_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Incidents
        incidents_handlers::submit_incident,
        incidents_handlers::list_incidents,
        incidents_handlers::update_incident_status,
        incidents_handlers::delete_incident,
        // Alerts
        alerts_handlers::list_alerts,
        // Forum
        forum_handlers::submit_post,
        forum_handlers::list_posts,
        forum_handlers::list_pending_posts,
        forum_handlers::disposition_post,
        // Resources
        resources_handlers::list_resources,
        resources_handlers::update_resource,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Incidents
            incidents_models::IncidentCategory,
            incidents_models::IncidentStatus,
            incidents_models::Severity,
            incidents_dtos::CreateIncidentDto,
            incidents_dtos::UpdateIncidentStatusDto,
            incidents_dtos::IncidentResponseDto,
            incidents_dtos::IncidentStatsDto,
            incidents_dtos::IncidentListDto,
            incidents_dtos::IncidentCreatedDto,
            incidents_dtos::StatusChangeDto,
            ApiResponse<incidents_dtos::IncidentCreatedDto>,
            ApiResponse<incidents_dtos::IncidentListDto>,
            ApiResponse<incidents_dtos::StatusChangeDto>,
            // Alerts
            alerts_dtos::AlertResponseDto,
            ApiResponse<Vec<alerts_dtos::AlertResponseDto>>,
            // Forum
            forum_dtos::CreatePostDto,
            forum_dtos::DispositionDto,
            forum_dtos::PublicPostDto,
            forum_dtos::PendingPostDto,
            ApiResponse<Vec<forum_dtos::PublicPostDto>>,
            ApiResponse<Vec<forum_dtos::PendingPostDto>>,
            // Resources
            resources_dtos::UpdateResourceDto,
            resources_dtos::ResourceResponseDto,
            ApiResponse<Vec<resources_dtos::ResourceResponseDto>>,
            ApiResponse<resources_dtos::ResourceResponseDto>,
        )
    ),
    tags(
        (name = "incidents", description = "Incident reporting and triage"),
        (name = "alerts", description = "Public alert feed (approved only)"),
        (name = "forum", description = "Community forum with admin moderation"),
        (name = "resources", description = "Campus resource tracking"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Campus Crisis Platform API",
        version = "0.1.0",
        description = "Incident reporting, public alerts and moderated community forum",
    )
)]
pub struct ApiDoc;

/// Adds the two admin credential schemes to the OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
            components.add_security_scheme(
                "admin_token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-Admin-Token"))),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
