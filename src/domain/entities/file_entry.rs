use crate::domain::entities::file_type::{FileCategory, classify, file_extension};
use std::path::{Path, PathBuf};

/// One file or directory of a listing.
///
/// `extension` and `mime_type` are always derived from `name` when the entry
/// is built; they are never set independently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub uri: PathBuf,
    pub is_directory: bool,
    pub size: Option<u64>,
    /// Seconds since the Unix epoch.
    pub modification_time: Option<i64>,
    pub extension: Option<String>,
    pub mime_type: Option<FileCategory>,
}

impl FileEntry {
    #[must_use]
    pub fn directory(uri: PathBuf, modification_time: Option<i64>) -> Self {
        Self {
            name: file_name(&uri),
            uri,
            is_directory: true,
            size: None,
            modification_time,
            extension: None,
            mime_type: None,
        }
    }

    #[must_use]
    pub fn file(uri: PathBuf, size: u64, modification_time: Option<i64>) -> Self {
        let name = file_name(&uri);
        Self {
            extension: file_extension(&name),
            mime_type: Some(classify(&name)),
            name,
            uri,
            is_directory: false,
            size: Some(size),
            modification_time,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    #[must_use]
    pub fn parent_directory(&self) -> Option<&Path> {
        self.uri.parent()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default()
}
