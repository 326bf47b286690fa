pub mod resource_dto;

pub use resource_dto::{ResourceListQuery, ResourceResponseDto, UpdateResourceDto};
