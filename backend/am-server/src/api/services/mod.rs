pub mod add_review_request;
pub mod create_service_request;
pub mod location_request;
pub mod near_query;
pub mod review_dto;
pub mod service_dto;
#[allow(clippy::module_inception)]
pub mod services;
pub mod update_service_request;
