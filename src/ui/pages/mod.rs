pub mod explorer_page;
pub mod settings_page;
