use crate::config::constants::{
    DEFAULT_FILE_EXTENSION, PHOTO_EXTENSION, PHOTO_PREFIX, RECENT_FILES_KEY, ROOT_DIRECTORY_TITLE,
};
use crate::domain::entities::file_entry::FileEntry;
use crate::domain::entities::file_type::{PreviewKind, preview_kind};
use crate::domain::entities::media::{DocumentFilter, EntryKind};
use crate::domain::entities::navigation::{ListingState, NavigationSnapshot};
use crate::domain::entities::recent_files::{RecentFiles, relocated};
use crate::domain::entities::sandbox::{Sandbox, validate_name};
use crate::domain::entities::sort::SortPreference;
use crate::domain::errors::domain_error::DomainError;
use crate::domain::errors::persistence_error::PersistenceError;
use crate::domain::ports::primary::file_explorer_use_case::FileExplorerUseCase;
use crate::domain::ports::secondary::camera::Camera;
use crate::domain::ports::secondary::document_picker::DocumentPicker;
use crate::domain::ports::secondary::file_system::FileSystemRepository;
use crate::domain::ports::secondary::key_value_store::KeyValueStore;
use crate::domain::ports::secondary::media_library::MediaLibrary;
use crate::domain::services::listing;
use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

struct NavigationState {
    current_path: PathBuf,
    files: Vec<FileEntry>,
    listing: ListingState,
    search_query: String,
    recent_files: RecentFiles,
    /// Bumped by every refresh; only the newest refresh may write `files`.
    listing_generation: u64,
}

impl NavigationState {
    fn new(current_path: PathBuf) -> Self {
        Self {
            current_path,
            files: Vec::new(),
            listing: ListingState::Idle,
            search_query: String::new(),
            recent_files: RecentFiles::new(),
            listing_generation: 0,
        }
    }

    fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            current_path: self.current_path.clone(),
            files: self.files.clone(),
            listing: self.listing.clone(),
            search_query: self.search_query.clone(),
            recent_files: self.recent_files.to_vec(),
        }
    }
}

/// Navigation and listing state of the explorer, plus the commands that
/// mutate the directory being displayed.
///
/// Every successful mutation lists `current_path` again before returning, so
/// the published `files` always reflects the file system after the command.
pub struct FileExplorerService {
    file_system: Arc<dyn FileSystemRepository>,
    store: Arc<dyn KeyValueStore>,
    sandbox: Sandbox,
    state: Mutex<NavigationState>,
    publisher: watch::Sender<NavigationSnapshot>,
}

impl FileExplorerService {
    pub fn new(
        file_system: Arc<dyn FileSystemRepository>,
        store: Arc<dyn KeyValueStore>,
        sandbox: Sandbox,
    ) -> Self {
        let state = NavigationState::new(sandbox.root().to_path_buf());
        let (publisher, _) = watch::channel(state.snapshot());
        Self {
            file_system,
            store,
            sandbox,
            state: Mutex::new(state),
            publisher,
        }
    }

    #[must_use]
    pub fn sandbox(&self) -> &Sandbox {
        &self.sandbox
    }

    fn publish(&self, state: &NavigationState) {
        self.publisher.send_replace(state.snapshot());
    }

    fn create_required_directories(&self) {
        for directory in self.sandbox.required_directories() {
            if self.file_system.exists(&directory) {
                continue;
            }
            if let Err(err) = self.file_system.create_directory(&directory) {
                error!(path = %directory.display(), error = %err, "Failed to create directory");
            }
        }
    }

    fn restore_recent_files(&self) {
        let stored = match self.store.get(RECENT_FILES_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return,
            Err(err) => {
                warn!(error = %err, "Failed to load recent files");
                return;
            }
        };

        let paths: Vec<PathBuf> = match serde_json::from_str(&stored) {
            Ok(paths) => paths,
            Err(err) => {
                warn!(error = %err, "Ignoring malformed recent files");
                return;
            }
        };

        let recent_files: RecentFiles = paths
            .into_iter()
            .filter(|path| self.sandbox.contains(path) && self.file_system.exists(path))
            .collect();

        let mut state = self.state.lock();
        state.recent_files = recent_files;
        self.publish(&state);
    }

    fn persist_recent_files(&self, recent_files: &[PathBuf]) {
        let result = serde_json::to_string(recent_files)
            .map_err(PersistenceError::from)
            .and_then(|json| self.store.set(RECENT_FILES_KEY, &json));
        if let Err(err) = result {
            warn!(error = %err, "Failed to save recent files");
        }
    }

    fn update_recent_files(&self, update: impl FnOnce(&mut RecentFiles) -> bool) {
        let recent_files = {
            let mut state = self.state.lock();
            if !update(&mut state.recent_files) {
                return;
            }
            self.publish(&state);
            state.recent_files.to_vec()
        };
        self.persist_recent_files(&recent_files);
    }

    /// Steps out of `removed` when the current directory was deleted with it.
    fn leave_removed_directory(&self, removed: &Path) {
        let mut state = self.state.lock();
        if !state.current_path.starts_with(removed) {
            return;
        }
        let parent = self
            .sandbox
            .parent_of(removed)
            .unwrap_or_else(|| self.sandbox.root().to_path_buf());
        debug!(from = %state.current_path.display(), to = %parent.display(), "Current directory deleted");
        state.current_path = parent;
        state.search_query.clear();
        state.files.clear();
        self.publish(&state);
    }

    /// Keeps the current directory when it, or one of its ancestors, moved.
    fn follow_moved_directory(&self, from: &Path, to: &Path) {
        let mut state = self.state.lock();
        if let Some(path) = relocated(&state.current_path, from, to) {
            state.current_path = path;
            self.publish(&state);
        }
    }

    /// Listing failures are already recorded in the state and logged; the
    /// mutation itself succeeded.
    fn refresh_after_mutation(&self) {
        self.refresh_files().ok();
    }

    /// Resolves a path that names an existing entry other than the root.
    fn resolve_entry(&self, uri: &Path) -> Result<PathBuf, DomainError> {
        let path = self.sandbox.resolve(uri)?;
        if self.sandbox.is_root(&path) {
            return Err(DomainError::ProtectedPath(path));
        }
        Ok(path)
    }

    fn target_in(&self, from: &Path, destination: &Path) -> Result<PathBuf, DomainError> {
        let destination = self.sandbox.resolve(destination)?;
        if destination.starts_with(from) {
            return Err(DomainError::SelfNesting(from.to_path_buf()));
        }
        let name = from
            .file_name()
            .ok_or_else(|| DomainError::ProtectedPath(from.to_path_buf()))?;
        Ok(destination.join(name))
    }
}

impl FileExplorerUseCase for FileExplorerService {
    fn initialize(&self) -> Result<(), DomainError> {
        self.create_required_directories();
        self.restore_recent_files();
        self.refresh_files().map(|_| ())
    }

    fn snapshot(&self) -> NavigationSnapshot {
        self.state.lock().snapshot()
    }

    fn subscribe(&self) -> watch::Receiver<NavigationSnapshot> {
        self.publisher.subscribe()
    }

    fn current_path(&self) -> PathBuf {
        self.state.lock().current_path.clone()
    }

    fn set_current_path(&self, path: &Path) -> Result<(), DomainError> {
        let path = self.sandbox.resolve(path)?;
        {
            let mut state = self.state.lock();
            if state.current_path == path {
                return Ok(());
            }
            debug!(path = %path.display(), "Navigating");
            state.current_path = path;
            state.search_query.clear();
            state.files.clear();
            self.publish(&state);
        }
        self.refresh_files().map(|_| ())
    }

    fn refresh_files(&self) -> Result<Vec<FileEntry>, DomainError> {
        let (generation, path) = {
            let mut state = self.state.lock();
            state.listing_generation += 1;
            state.listing = ListingState::Loading;
            self.publish(&state);
            (state.listing_generation, state.current_path.clone())
        };

        let result = self.file_system.list(&path);

        let mut state = self.state.lock();
        if state.listing_generation != generation || state.current_path != path {
            debug!(path = %path.display(), "Discarding superseded listing");
            return result.map_err(DomainError::from);
        }

        match result {
            Ok(files) => {
                state.files = files.clone();
                state.listing = ListingState::Ready;
                self.publish(&state);
                Ok(files)
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "Failed to list directory");
                state.files.clear();
                state.listing = ListingState::Error(err.to_string());
                self.publish(&state);
                Err(err.into())
            }
        }
    }

    fn can_go_back(&self) -> bool {
        !self.sandbox.is_root(&self.current_path())
    }

    fn go_back(&self) -> Result<(), DomainError> {
        let parent = self
            .sandbox
            .parent_of(&self.current_path())
            .ok_or(DomainError::NoParent)?;
        self.set_current_path(&parent)
    }

    fn current_directory_name(&self) -> String {
        self.current_path()
            .file_name()
            .map_or_else(
                || ROOT_DIRECTORY_TITLE.to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
    }

    fn set_search_query(&self, query: &str) {
        let mut state = self.state.lock();
        state.search_query = query.to_string();
        self.publish(&state);
    }

    fn visible_files(&self, sort: SortPreference, show_hidden: bool) -> Vec<FileEntry> {
        let state = self.state.lock();
        listing::visible_files(&state.files, &state.search_query, sort, show_hidden)
    }

    fn create(&self, kind: EntryKind, name: &str, content: &str) -> Result<PathBuf, DomainError> {
        let name = validate_name(name)?;
        let directory = self.current_path();

        let path = match kind {
            EntryKind::File => {
                let path = self.sandbox.child(&directory, &with_default_extension(name))?;
                self.file_system.create_file(&path, content)?;
                path
            }
            EntryKind::Folder => {
                let path = self.sandbox.child(&directory, name)?;
                self.file_system.create_directory(&path)?;
                path
            }
        };

        info!(path = %path.display(), ?kind, "Created entry");
        self.refresh_after_mutation();
        Ok(path)
    }

    fn delete(&self, uri: &Path) -> Result<(), DomainError> {
        let path = self.resolve_entry(uri)?;
        self.file_system.delete_entry(&path)?;
        info!(path = %path.display(), "Deleted entry");

        self.update_recent_files(|recent| recent.forget(&path));
        self.leave_removed_directory(&path);
        self.refresh_after_mutation();
        Ok(())
    }

    fn rename(&self, uri: &Path, new_name: &str) -> Result<PathBuf, DomainError> {
        let from = self.resolve_entry(uri)?;
        let parent = self
            .sandbox
            .parent_of(&from)
            .ok_or_else(|| DomainError::ProtectedPath(from.clone()))?;
        let to = self.sandbox.child(&parent, new_name)?;
        if to == from {
            return Ok(to);
        }

        self.file_system.move_entry(&from, &to)?;
        info!(from = %from.display(), to = %to.display(), "Renamed entry");

        self.update_recent_files(|recent| recent.relocate(&from, &to));
        self.follow_moved_directory(&from, &to);
        self.refresh_after_mutation();
        Ok(to)
    }

    fn copy_to(&self, uri: &Path, destination: &Path) -> Result<PathBuf, DomainError> {
        let from = self.resolve_entry(uri)?;
        let to = self.target_in(&from, destination)?;

        self.file_system.copy_entry(&from, &to)?;
        info!(from = %from.display(), to = %to.display(), "Copied entry");

        self.refresh_after_mutation();
        Ok(to)
    }

    fn move_to(&self, uri: &Path, destination: &Path) -> Result<PathBuf, DomainError> {
        let from = self.resolve_entry(uri)?;
        let to = self.target_in(&from, destination)?;
        if to == from {
            return Ok(to);
        }

        self.file_system.move_entry(&from, &to)?;
        info!(from = %from.display(), to = %to.display(), "Moved entry");

        self.update_recent_files(|recent| recent.relocate(&from, &to));
        self.follow_moved_directory(&from, &to);
        self.refresh_after_mutation();
        Ok(to)
    }

    fn import_document(&self, picker: &dyn DocumentPicker) -> Result<Option<PathBuf>, DomainError> {
        let Some(document) = picker.pick_document(&DocumentFilter::Any) else {
            debug!("Import cancelled");
            return Ok(None);
        };

        let target = self.sandbox.child(&self.current_path(), &document.name)?;
        self.file_system.copy_entry(&document.uri, &target)?;
        info!(path = %target.display(), "Imported document");

        self.refresh_after_mutation();
        Ok(Some(target))
    }

    fn capture_photo(
        &self,
        camera: &dyn Camera,
        media_library: &dyn MediaLibrary,
    ) -> Result<PathBuf, DomainError> {
        let photo = camera.capture_photo()?;
        let target = self
            .sandbox
            .child(&self.current_path(), &photo_file_name(Utc::now()))?;

        self.file_system.copy_entry(&photo.uri, &target)?;
        info!(path = %target.display(), "Saved photo");

        if let Err(err) = media_library.save_to_gallery(&target) {
            warn!(path = %target.display(), error = %err, "Failed to save photo to gallery");
        }

        self.refresh_after_mutation();
        Ok(target)
    }

    fn open_file(&self, uri: &Path) -> Result<PreviewKind, DomainError> {
        let path = self.resolve_entry(uri)?;
        self.add_to_recent(&path);
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(preview_kind(&name))
    }

    fn read_text(&self, uri: &Path) -> Result<String, DomainError> {
        let path = self.resolve_entry(uri)?;
        Ok(self.file_system.read_text(&path)?)
    }

    fn save_text(&self, uri: &Path, content: &str) -> Result<(), DomainError> {
        let path = self.resolve_entry(uri)?;
        self.file_system.write_text(&path, content)?;
        info!(path = %path.display(), "Saved text");

        if path.parent() == Some(self.current_path().as_path()) {
            self.refresh_after_mutation();
        }
        Ok(())
    }

    fn add_to_recent(&self, uri: &Path) {
        self.update_recent_files(|recent| {
            recent.add(uri);
            true
        });
    }

    fn recent_files(&self) -> Vec<PathBuf> {
        self.state.lock().recent_files.to_vec()
    }
}

/// Names without a `.` get the default text extension.
fn with_default_extension(name: &str) -> String {
    if name.contains('.') {
        name.to_string()
    } else {
        format!("{name}.{DEFAULT_FILE_EXTENSION}")
    }
}

/// `IMG_<ISO 8601 timestamp with ':' and '.' replaced by '-'>.jpg`
#[must_use]
pub fn photo_file_name(taken_at: DateTime<Utc>) -> String {
    let timestamp = taken_at
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{PHOTO_PREFIX}{timestamp}.{PHOTO_EXTENSION}")
}
