use crate::domain::entities::file_entry::FileEntry;
use crate::domain::errors::file_system_error::FileSystemError;
use std::path::Path;

/// Turns navigation and mutation intents into file system effects.
pub trait FileSystemRepository: Send + Sync {
    /// Immediate children of `path`, with metadata. Not recursive.
    fn list(&self, path: &Path) -> Result<Vec<FileEntry>, FileSystemError>;

    /// Creates `path` and its missing ancestors. Succeeds if it already exists.
    fn create_directory(&self, path: &Path) -> Result<(), FileSystemError>;

    /// Writes `content` to `path`, creating or truncating it.
    fn create_file(&self, path: &Path, content: &str) -> Result<(), FileSystemError>;

    /// Removes a file, or a directory with everything below it.
    fn delete_entry(&self, path: &Path) -> Result<(), FileSystemError>;

    /// Fails with [`FileSystemError::Conflict`] if `to` exists.
    fn move_entry(&self, from: &Path, to: &Path) -> Result<(), FileSystemError>;

    /// Fails with [`FileSystemError::Conflict`] if `to` exists.
    fn copy_entry(&self, from: &Path, to: &Path) -> Result<(), FileSystemError>;

    fn read_text(&self, path: &Path) -> Result<String, FileSystemError>;

    fn write_text(&self, path: &Path, content: &str) -> Result<(), FileSystemError>;

    fn exists(&self, path: &Path) -> bool;
}
