pub mod file_explorer_use_case;
pub mod settings_use_case;
