pub mod camera;
pub mod document_picker;
pub mod file_system;
pub mod key_value_store;
pub mod media_library;
