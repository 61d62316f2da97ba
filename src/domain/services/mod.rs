pub mod file_explorer_service;
pub mod listing;
pub mod settings_service;
