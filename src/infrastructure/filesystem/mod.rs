pub mod drive_space;
pub mod local_file_system;
pub mod native_document_picker;
