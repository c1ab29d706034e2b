pub mod apartment;
pub mod geo_point;
pub mod identity;
pub mod identity_scope;
pub mod registration_status;
pub mod review;
pub mod role;
pub mod service;
