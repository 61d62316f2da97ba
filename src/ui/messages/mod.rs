pub mod app_message;
pub mod explorer_message;
pub mod settings_message;
