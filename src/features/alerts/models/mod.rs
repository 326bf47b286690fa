mod alert;

pub use alert::{derived_title, Alert, CreateNotice};
