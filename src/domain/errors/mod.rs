pub mod domain_error;
pub mod file_system_error;
pub mod persistence_error;
