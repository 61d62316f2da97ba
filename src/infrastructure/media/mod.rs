pub mod gallery_directory;
pub mod image_file_camera;
