pub mod apartment_repository;
pub mod identity_row;
pub mod manager_repository;
pub mod resident_repository;
pub mod review_repository;
pub mod service_provider_repository;
pub mod service_repository;
