pub mod file_entry;
pub mod file_type;
pub mod media;
pub mod navigation;
pub mod recent_files;
pub mod sandbox;
pub mod settings;
pub mod sort;
