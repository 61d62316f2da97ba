use crate::domain::errors::file_system_error::FileSystemError;
use crate::domain::errors::persistence_error::PersistenceError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("File system error: {0}")]
    FileSystem(#[from] FileSystemError),
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
    #[error("Path is outside the explorer directory: {0:?}")]
    OutsideSandbox(PathBuf),
    #[error("Invalid name: {0:?}")]
    InvalidName(String),
    #[error("The explorer root cannot be modified: {0:?}")]
    ProtectedPath(PathBuf),
    #[error("Cannot place {0:?} inside itself")]
    SelfNesting(PathBuf),
    #[error("Already at the explorer root")]
    NoParent,
    #[error("Capture failed: {0}")]
    Capture(String),
}
