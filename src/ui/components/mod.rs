pub mod file_list;
pub mod search;
pub mod text_preview;
