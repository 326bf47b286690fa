mod incident;

pub use incident::{
    CreateIncident, Incident, IncidentCategory, IncidentStats, IncidentStatus, Severity,
};
