use crate::domain::entities::file_entry::FileEntry;
use crate::domain::entities::file_type::PreviewKind;
use crate::domain::entities::media::EntryKind;
use crate::domain::entities::navigation::NavigationSnapshot;
use crate::domain::entities::sort::SortPreference;
use crate::domain::errors::domain_error::DomainError;
use crate::domain::ports::secondary::camera::Camera;
use crate::domain::ports::secondary::document_picker::DocumentPicker;
use crate::domain::ports::secondary::media_library::MediaLibrary;
use std::path::{Path, PathBuf};
use tokio::sync::watch;

pub trait FileExplorerUseCase: Send + Sync {
    /// Creates the explorer directories, restores the recent-files list and
    /// lists the root.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the first listing fails. Failures to
    /// create directories or to restore recent files are only logged.
    fn initialize(&self) -> Result<(), DomainError>;

    fn snapshot(&self) -> NavigationSnapshot;

    /// Receives a new [`NavigationSnapshot`] after every state change.
    fn subscribe(&self) -> watch::Receiver<NavigationSnapshot>;

    fn current_path(&self) -> PathBuf;

    /// Navigates to `path` and lists it. A no-op when already there.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if:
    /// - [`OutsideSandbox`](DomainError::OutsideSandbox): `path` escapes the explorer root.
    /// - [`FileSystem`](DomainError::FileSystem): the new directory cannot be listed.
    fn set_current_path(&self, path: &Path) -> Result<(), DomainError>;

    /// Lists `current_path` again. Only the newest of concurrent refreshes
    /// updates the state.
    ///
    /// # Errors
    ///
    /// Returns a [`FileSystem`](DomainError::FileSystem) error when the
    /// listing fails; the state then holds an empty listing and the message.
    fn refresh_files(&self) -> Result<Vec<FileEntry>, DomainError>;

    fn can_go_back(&self) -> bool;

    /// # Errors
    ///
    /// Returns [`NoParent`](DomainError::NoParent) at the explorer root.
    fn go_back(&self) -> Result<(), DomainError>;

    fn current_directory_name(&self) -> String;

    fn set_search_query(&self, query: &str);

    /// The current listing filtered by the search query and sorted.
    fn visible_files(&self, sort: SortPreference, show_hidden: bool) -> Vec<FileEntry>;

    /// Creates a file (appending `.txt` to names without an extension) or a
    /// folder in `current_path`, then refreshes.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidName`](DomainError::InvalidName) for unusable names
    /// and [`FileSystem`](DomainError::FileSystem) when creation fails.
    fn create(&self, kind: EntryKind, name: &str, content: &str) -> Result<PathBuf, DomainError>;

    /// # Errors
    ///
    /// Returns a [`DomainError`] when `uri` is outside the explorer, is the
    /// root itself, or cannot be removed.
    fn delete(&self, uri: &Path) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// Returns a [`DomainError`] for invalid names, an existing target, or
    /// a failed move.
    fn rename(&self, uri: &Path, new_name: &str) -> Result<PathBuf, DomainError>;

    /// Copies `uri` into `destination` under the same name.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] when either path is outside the explorer,
    /// the target exists, or the copy fails.
    fn copy_to(&self, uri: &Path, destination: &Path) -> Result<PathBuf, DomainError>;

    /// Moves `uri` into `destination` under the same name.
    ///
    /// # Errors
    ///
    /// Same as [`copy_to`](Self::copy_to).
    fn move_to(&self, uri: &Path, destination: &Path) -> Result<PathBuf, DomainError>;

    /// Copies a picked document into `current_path`. `Ok(None)` when the
    /// picker was cancelled.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] when the copy fails or the name clashes.
    fn import_document(&self, picker: &dyn DocumentPicker) -> Result<Option<PathBuf>, DomainError>;

    /// Stores a new photo in `current_path` and offers it to the media
    /// library. A media library failure does not fail the capture.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] when the camera or the copy fails.
    fn capture_photo(
        &self,
        camera: &dyn Camera,
        media_library: &dyn MediaLibrary,
    ) -> Result<PathBuf, DomainError>;

    /// Records `uri` as recently opened and tells which viewer fits it.
    ///
    /// # Errors
    ///
    /// Returns [`OutsideSandbox`](DomainError::OutsideSandbox) for foreign paths.
    fn open_file(&self, uri: &Path) -> Result<PreviewKind, DomainError>;

    /// # Errors
    ///
    /// Returns a [`DomainError`] when the file is outside the explorer or unreadable.
    fn read_text(&self, uri: &Path) -> Result<String, DomainError>;

    /// # Errors
    ///
    /// Returns a [`DomainError`] when the file is outside the explorer or unwritable.
    fn save_text(&self, uri: &Path, content: &str) -> Result<(), DomainError>;

    fn add_to_recent(&self, uri: &Path);

    fn recent_files(&self) -> Vec<PathBuf>;
}
