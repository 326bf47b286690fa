pub mod resource_handler;

pub use resource_handler::{
    __path_list_resources, __path_update_resource, list_resources, update_resource,
};
