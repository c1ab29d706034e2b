pub mod central;
pub mod tenant_connection_manager;
