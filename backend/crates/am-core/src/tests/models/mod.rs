mod apartment;
mod geo_point;
mod identity;
mod registration_status;
mod review;
mod role;
mod service;
