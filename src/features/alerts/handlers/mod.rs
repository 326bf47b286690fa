pub mod alert_handler;

pub use alert_handler::{__path_list_alerts, list_alerts};
