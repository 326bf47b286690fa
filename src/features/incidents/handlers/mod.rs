pub mod incident_handler;

pub use incident_handler::{
    __path_delete_incident, __path_list_incidents, __path_submit_incident,
    __path_update_incident_status, delete_incident, list_incidents, submit_incident,
    update_incident_status, IncidentState,
};
