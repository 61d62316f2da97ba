use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    #[error("Cannot read directory {path:?}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Not a directory: {path:?}")]
    NotADirectory { path: PathBuf },
    #[error("Cannot create {path:?}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cannot delete {path:?}: {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cannot copy or move {from:?} to {to:?}: {source}")]
    CopyMove {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Destination already exists: {path:?}")]
    Conflict { path: PathBuf },
    #[error("Cannot read or write {path:?}: {source}")]
    ReadWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileSystemError {
    /// The underlying I/O failure kind, so callers can tell e.g. a missing
    /// path from a permission problem.
    #[must_use]
    pub fn kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::DirectoryRead { source, .. }
            | Self::Create { source, .. }
            | Self::Delete { source, .. }
            | Self::CopyMove { source, .. }
            | Self::ReadWrite { source, .. } => Some(source.kind()),
            Self::NotADirectory { .. } | Self::Conflict { .. } => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(io::ErrorKind::NotFound)
    }
}
