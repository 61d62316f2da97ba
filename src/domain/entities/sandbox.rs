use crate::config::constants::{
    APP_DIRECTORY_NAME, CAMERA_DIRECTORY_NAME, DOCUMENTS_DIRECTORY_NAME,
};
use crate::domain::errors::domain_error::DomainError;
use std::path::{Component, Path, PathBuf};

/// The `FileExplorer/` directory all navigation is confined to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sandbox {
    root: PathBuf,
}

impl Sandbox {
    #[must_use]
    pub fn new(home: &Path) -> Self {
        Self {
            root: normalize(&home.join(APP_DIRECTORY_NAME)),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn camera_directory(&self) -> PathBuf {
        self.root.join(CAMERA_DIRECTORY_NAME)
    }

    #[must_use]
    pub fn documents_directory(&self) -> PathBuf {
        self.root.join(DOCUMENTS_DIRECTORY_NAME)
    }

    /// Directories that must exist before the first listing.
    #[must_use]
    pub fn required_directories(&self) -> [PathBuf; 3] {
        [
            self.root.clone(),
            self.camera_directory(),
            self.documents_directory(),
        ]
    }

    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        normalize(path).starts_with(&self.root)
    }

    #[must_use]
    pub fn is_root(&self, path: &Path) -> bool {
        normalize(path) == self.root
    }

    /// Resolves `path` to its normalized form, refusing anything that
    /// escapes the sandbox.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OutsideSandbox`] when `path` is not the root or
    /// one of its descendants.
    pub fn resolve(&self, path: &Path) -> Result<PathBuf, DomainError> {
        let normalized = normalize(path);
        if normalized.starts_with(&self.root) {
            Ok(normalized)
        } else {
            Err(DomainError::OutsideSandbox(path.to_path_buf()))
        }
    }

    /// Parent of `path`, or `None` at the sandbox root.
    #[must_use]
    pub fn parent_of(&self, path: &Path) -> Option<PathBuf> {
        let normalized = normalize(path);
        if normalized == self.root || !normalized.starts_with(&self.root) {
            return None;
        }
        normalized.parent().map(Path::to_path_buf)
    }

    /// Joins a user supplied entry name onto `directory`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidName`] for empty names, `.`/`..`, or
    /// names containing a path separator, and
    /// [`DomainError::OutsideSandbox`] if `directory` is outside the sandbox.
    pub fn child(&self, directory: &Path, name: &str) -> Result<PathBuf, DomainError> {
        let name = validate_name(name)?;
        self.resolve(&directory.join(name))
    }
}

/// Trims `name` and checks it can be used as a single path component.
///
/// # Errors
///
/// Returns [`DomainError::InvalidName`] when it cannot.
pub fn validate_name(name: &str) -> Result<&str, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains(['/', '\\'])
    {
        return Err(DomainError::InvalidName(name.to_string()));
    }
    Ok(trimmed)
}

/// Lexically resolves `.` and `..` components without touching the disk.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
