use crate::domain::errors::domain_error::DomainError;
use crate::domain::errors::file_system_error::FileSystemError;
use crate::domain::ports::secondary::media_library::MediaLibrary;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// [`MediaLibrary`] that keeps a copy of every saved photo in a plain
/// directory, standing in for the platform gallery on desktop.
pub struct GalleryDirectory {
    directory: PathBuf,
}

impl GalleryDirectory {
    #[must_use]
    pub const fn new(directory: PathBuf) -> Self {
        Self { directory }
    }
}

impl MediaLibrary for GalleryDirectory {
    fn save_to_gallery(&self, uri: &Path) -> Result<(), DomainError> {
        let name = uri
            .file_name()
            .ok_or_else(|| DomainError::InvalidName(uri.display().to_string()))?;
        fs::create_dir_all(&self.directory).map_err(|source| FileSystemError::Create {
            path: self.directory.clone(),
            source,
        })?;

        let target = self.directory.join(name);
        fs::copy(uri, &target).map_err(|source| FileSystemError::CopyMove {
            from: uri.to_path_buf(),
            to: target.clone(),
            source,
        })?;
        info!(path = %target.display(), "Saved to the gallery");
        Ok(())
    }
}
