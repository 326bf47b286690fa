use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::alerts::services::AlertService;
use crate::features::forum::models::{CreateForumPost, ForumPost};
use crate::features::forum::services::ForumService;
use crate::features::incidents::dtos::{CreateIncidentDto, UpdateIncidentStatusDto};
use crate::features::incidents::models::{
    CreateIncident, Incident, IncidentCategory, IncidentStatus, Severity,
};
use crate::features::incidents::services::IncidentService;

/// Outcome of an incident status update.
#[derive(Debug, Clone)]
pub struct StatusChange {
    pub incident: Incident,
    pub old_status: IncidentStatus,
    pub new_status: IncidentStatus,
}

/// Orchestrates each mutating request across the content filter, the
/// incident store, the alert projection and the moderation queue.
///
/// The incident write and the alert projection are deliberately not wrapped
/// in one transaction: a projection failure after the incident is persisted
/// leaves an incident without a public alert, which is logged and tolerated
/// rather than rolled back.
pub struct LifecycleService {
    incidents: Arc<IncidentService>,
    alerts: Arc<AlertService>,
    forum: Arc<ForumService>,
}

impl LifecycleService {
    pub fn new(
        incidents: Arc<IncidentService>,
        alerts: Arc<AlertService>,
        forum: Arc<ForumService>,
    ) -> Self {
        Self {
            incidents,
            alerts,
            forum,
        }
    }

    /// Accept a new incident report and publish its alert immediately.
    ///
    /// Pipeline: content filter on description and location → category
    /// checked against the closed enum → severity normalized (unknown →
    /// yellow) → incident insert → alert projection.
    pub async fn submit_incident(&self, dto: &CreateIncidentDto) -> Result<Incident> {
        if let Some(term) = crate::shared::content_filter::first_blocked_term(&[
            dto.description.as_str(),
            dto.location.as_str(),
        ]) {
            return Err(AppError::BlockedContent(term.to_string()));
        }

        let category = IncidentCategory::parse(&dto.category)
            .ok_or_else(|| AppError::Validation("Invalid category".to_string()))?;

        let severity = Severity::parse_lenient(dto.severity.as_deref());

        let incident = self
            .incidents
            .create(&CreateIncident {
                category,
                location: dto.location.clone(),
                description: dto.description.clone(),
                contact_info: dto.contact_info.clone(),
                severity,
            })
            .await?;

        // Incident reports skip the moderation queue: the projection is
        // approved at birth so it shows up on the dashboard right away.
        if let Err(e) = self.alerts.project_new(&incident).await {
            tracing::error!(
                "Incident {} persisted but alert projection failed: {}",
                incident.id,
                e
            );
        }

        Ok(incident)
    }

    /// Apply a status change and propagate it onto the projected alert.
    pub async fn update_incident_status(
        &self,
        id: Uuid,
        dto: &UpdateIncidentStatusDto,
    ) -> Result<StatusChange> {
        let new_status = IncidentStatus::parse(&dto.status)
            .ok_or_else(|| AppError::Validation("Invalid status".to_string()))?;

        let existing = self.incidents.get_by_id(id).await?;
        let old_status = existing.status;

        let severity = new_status.severity();
        let incident = self.incidents.update_status(id, new_status, severity).await?;

        // Best-effort sync; the alert keeps its original severity.
        match self.alerts.sync_status(id, new_status).await {
            Ok(0) => tracing::warn!("Incident {} has no projected alert to sync", id),
            Ok(n) => tracing::debug!("Synced status of {} alert(s) for incident {}", n, id),
            Err(e) => tracing::error!(
                "Incident {} status updated but alert sync failed: {}",
                id,
                e
            ),
        }

        Ok(StatusChange {
            incident,
            old_status,
            new_status,
        })
    }

    /// Delete an incident together with its projected alerts.
    pub async fn delete_incident(&self, id: Uuid) -> Result<()> {
        // Lookup first so an unknown id reports NotFound before any write
        self.incidents.get_by_id(id).await?;

        match self.alerts.remove_for_incident(id).await {
            Ok(n) => tracing::info!("Removed {} alert(s) for incident {}", n, id),
            // The FK cascade on the alerts table reclaims stragglers
            Err(e) => tracing::error!("Failed to remove alerts for incident {}: {}", id, e),
        }

        self.incidents.delete(id).await
    }

    /// Accept a forum post into the moderation queue.
    ///
    /// Unlike incidents, posts only become visible after an admin approves
    /// them.
    pub async fn submit_post(&self, user_name: &str, message: &str) -> Result<ForumPost> {
        if let Some(term) = crate::shared::content_filter::first_blocked_term(&[message, user_name])
        {
            return Err(AppError::BlockedContent(term.to_string()));
        }

        self.forum
            .create(&CreateForumPost {
                user_name: user_name.to_string(),
                message: message.to_string(),
            })
            .await
    }

    /// Admin disposition of a pending post: approve makes it public, reject
    /// removes it permanently. Either way the post can only be dispositioned
    /// once.
    pub async fn disposition_post(&self, id: Uuid, approve: bool) -> Result<()> {
        self.forum.disposition(id, approve).await
    }
}
