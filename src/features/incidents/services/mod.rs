mod incident_service;
mod lifecycle_service;

pub use incident_service::IncidentService;
pub use lifecycle_service::{LifecycleService, StatusChange};
