use file_explorer::domain::entities::file_entry::FileEntry;
use file_explorer::domain::entities::file_type::PreviewKind;
use file_explorer::domain::entities::media::{
    CapturedPhoto, DocumentFilter, EntryKind, PickedDocument,
};
use file_explorer::domain::entities::navigation::ListingState;
use file_explorer::domain::entities::sandbox::Sandbox;
use file_explorer::domain::entities::settings::{Settings, SettingsPatch, ThemeMode};
use file_explorer::domain::entities::sort::{SortBy, SortOrder, SortPreference};
use file_explorer::domain::errors::domain_error::DomainError;
use file_explorer::domain::errors::file_system_error::FileSystemError;
use file_explorer::domain::ports::primary::file_explorer_use_case::FileExplorerUseCase;
use file_explorer::domain::ports::primary::settings_use_case::SettingsUseCase;
use file_explorer::domain::ports::secondary::camera::Camera;
use file_explorer::domain::ports::secondary::document_picker::DocumentPicker;
use file_explorer::domain::ports::secondary::file_system::FileSystemRepository;
use file_explorer::domain::ports::secondary::key_value_store::KeyValueStore;
use file_explorer::domain::ports::secondary::media_library::MediaLibrary;
use file_explorer::domain::services::file_explorer_service::FileExplorerService;
use file_explorer::domain::services::settings_service::SettingsService;
use file_explorer::infrastructure::database::pool::SqliteRepositoryPool;
use file_explorer::infrastructure::database::sqlite_key_value_store::SqliteKeyValueStore;
use file_explorer::infrastructure::filesystem::local_file_system::LocalFileSystem;
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Barrier};
use std::thread;
use tempfile::TempDir;

// Test helpers and fixtures
struct TestFixture {
    temp_dir: TempDir,
    store: Arc<SqliteKeyValueStore>,
    explorer: Arc<FileExplorerService>,
}

impl TestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let pool = SqliteRepositoryPool::new(&db_path.to_string_lossy())
            .expect("Failed to create test database");
        let store = Arc::new(SqliteKeyValueStore::new(pool));

        let explorer = Arc::new(FileExplorerService::new(
            Arc::new(LocalFileSystem),
            store.clone(),
            Sandbox::new(&temp_dir.path().join("home")),
        ));
        explorer.initialize().expect("Failed to initialize explorer");

        Self {
            temp_dir,
            store,
            explorer,
        }
    }

    /// A fresh explorer over the same directories and database, as after an
    /// application restart.
    fn restart(&self) -> FileExplorerService {
        let explorer = FileExplorerService::new(
            Arc::new(LocalFileSystem),
            self.store.clone(),
            Sandbox::new(&self.temp_dir.path().join("home")),
        );
        explorer.initialize().expect("Failed to initialize explorer");
        explorer
    }

    fn root(&self) -> PathBuf {
        self.explorer.sandbox().root().to_path_buf()
    }

    /// A file living outside the explorer, e.g. in the platform's downloads.
    fn outside_file(&self, name: &str, content: &str) -> PathBuf {
        let directory = self.temp_dir.path().join("outside");
        fs::create_dir_all(&directory).expect("Failed to create outside directory");
        let path = directory.join(name);
        fs::write(&path, content).expect("Failed to write outside file");
        path
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .explorer
            .snapshot()
            .files
            .into_iter()
            .map(|file| file.name)
            .collect();
        names.sort();
        names
    }
}

struct FakePicker {
    document: Option<PickedDocument>,
}

impl DocumentPicker for FakePicker {
    fn pick_document(&self, _filter: &DocumentFilter) -> Option<PickedDocument> {
        self.document.clone()
    }
}

struct FakeCamera {
    photo: Option<PathBuf>,
}

impl Camera for FakeCamera {
    fn capture_photo(&self) -> Result<CapturedPhoto, DomainError> {
        self.photo
            .clone()
            .map(|uri| CapturedPhoto { uri })
            .ok_or_else(|| DomainError::Capture("camera unavailable".to_string()))
    }
}

#[derive(Default)]
struct RecordingGallery {
    saved: Mutex<Vec<PathBuf>>,
    fail: bool,
}

impl MediaLibrary for RecordingGallery {
    fn save_to_gallery(&self, uri: &Path) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::Capture("gallery permission denied".to_string()));
        }
        self.saved.lock().push(uri.to_path_buf());
        Ok(())
    }
}

/// Holds every listing of `gate` until the test releases it.
struct GatedFileSystem {
    gate: PathBuf,
    entered: Barrier,
    release: Barrier,
}

impl FileSystemRepository for GatedFileSystem {
    fn list(&self, path: &Path) -> Result<Vec<FileEntry>, FileSystemError> {
        if path == self.gate {
            self.entered.wait();
            self.release.wait();
        }
        LocalFileSystem.list(path)
    }

    fn create_directory(&self, path: &Path) -> Result<(), FileSystemError> {
        LocalFileSystem.create_directory(path)
    }

    fn create_file(&self, path: &Path, content: &str) -> Result<(), FileSystemError> {
        LocalFileSystem.create_file(path, content)
    }

    fn delete_entry(&self, path: &Path) -> Result<(), FileSystemError> {
        LocalFileSystem.delete_entry(path)
    }

    fn move_entry(&self, from: &Path, to: &Path) -> Result<(), FileSystemError> {
        LocalFileSystem.move_entry(from, to)
    }

    fn copy_entry(&self, from: &Path, to: &Path) -> Result<(), FileSystemError> {
        LocalFileSystem.copy_entry(from, to)
    }

    fn read_text(&self, path: &Path) -> Result<String, FileSystemError> {
        LocalFileSystem.read_text(path)
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), FileSystemError> {
        LocalFileSystem.write_text(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        LocalFileSystem.exists(path)
    }
}

fn is_conflict(error: &DomainError) -> bool {
    matches!(
        error,
        DomainError::FileSystem(FileSystemError::Conflict { .. })
    )
}

mod navigation_tests {
    use super::*;

    #[test]
    fn initialize_creates_the_explorer_layout() {
        let fixture = TestFixture::new();
        let root = fixture.root();

        assert!(root.join("Camera").is_dir());
        assert!(root.join("Documents").is_dir());
        assert_eq!(fixture.explorer.current_path(), root);
        assert_eq!(fixture.names(), vec!["Camera", "Documents"]);
        assert_eq!(fixture.explorer.snapshot().listing, ListingState::Ready);
    }

    #[test]
    fn cannot_go_back_from_the_root() {
        let fixture = TestFixture::new();

        assert!(!fixture.explorer.can_go_back());
        assert!(matches!(
            fixture.explorer.go_back(),
            Err(DomainError::NoParent)
        ));
        assert_eq!(fixture.explorer.current_path(), fixture.root());
        assert_eq!(fixture.explorer.current_directory_name(), "FileExplorer");
    }

    #[test]
    fn navigates_into_a_folder_and_back() {
        let fixture = TestFixture::new();
        let documents = fixture.root().join("Documents");
        fs::write(documents.join("letter.txt"), "dear").unwrap();

        fixture.explorer.set_current_path(&documents).unwrap();

        assert!(fixture.explorer.can_go_back());
        assert_eq!(fixture.explorer.current_directory_name(), "Documents");
        assert_eq!(fixture.names(), vec!["letter.txt"]);

        fixture.explorer.go_back().unwrap();
        assert_eq!(fixture.explorer.current_path(), fixture.root());
        assert_eq!(fixture.names(), vec!["Camera", "Documents"]);
    }

    #[test]
    fn paths_outside_the_explorer_are_refused() {
        let fixture = TestFixture::new();

        let result = fixture.explorer.set_current_path(fixture.temp_dir.path());

        assert!(matches!(result, Err(DomainError::OutsideSandbox(_))));
        assert_eq!(fixture.explorer.current_path(), fixture.root());
    }

    #[test]
    fn navigation_clears_the_search_query() {
        let fixture = TestFixture::new();
        fixture.explorer.set_search_query("cam");
        assert_eq!(fixture.explorer.snapshot().search_query, "cam");

        fixture
            .explorer
            .set_current_path(&fixture.root().join("Camera"))
            .unwrap();

        assert_eq!(fixture.explorer.snapshot().search_query, "");
    }

    #[test]
    fn failed_listing_clears_files_and_records_the_error() {
        let fixture = TestFixture::new();
        let temporary = fixture
            .explorer
            .create(EntryKind::Folder, "Temporary", "")
            .unwrap();
        fixture.explorer.set_current_path(&temporary).unwrap();
        fixture.explorer.create(EntryKind::File, "a", "").unwrap();
        assert_eq!(fixture.names(), vec!["a.txt"]);

        fs::remove_dir_all(&temporary).unwrap();
        let result = fixture.explorer.refresh_files();

        assert!(matches!(result, Err(DomainError::FileSystem(_))));
        let snapshot = fixture.explorer.snapshot();
        assert!(snapshot.files.is_empty());
        assert!(snapshot.error().is_some());

        fixture.explorer.go_back().unwrap();
        assert_eq!(fixture.explorer.snapshot().listing, ListingState::Ready);
    }

    #[test]
    fn subscribers_see_every_listing() {
        let fixture = TestFixture::new();
        let mut receiver = fixture.explorer.subscribe();
        receiver.borrow_and_update();

        fixture.explorer.create(EntryKind::File, "note", "hi").unwrap();

        assert!(receiver.has_changed().unwrap());
        let snapshot = receiver.borrow_and_update().clone();
        assert!(snapshot.files.iter().any(|file| file.name == "note.txt"));
        assert_eq!(snapshot.listing, ListingState::Ready);
    }

    #[test]
    fn superseded_listing_is_discarded() {
        let temp_dir = TempDir::new().unwrap();
        let home = temp_dir.path().join("home");
        let sandbox = Sandbox::new(&home);
        let slow = sandbox.camera_directory();
        let fast = sandbox.documents_directory();

        let file_system = Arc::new(GatedFileSystem {
            gate: slow.clone(),
            entered: Barrier::new(2),
            release: Barrier::new(2),
        });
        let pool = SqliteRepositoryPool::new(&temp_dir.path().join("test.db").to_string_lossy())
            .unwrap();
        let explorer = Arc::new(FileExplorerService::new(
            file_system.clone(),
            Arc::new(SqliteKeyValueStore::new(pool)),
            sandbox,
        ));
        explorer.initialize().unwrap();
        fs::write(fast.join("fast.txt"), "").unwrap();
        fs::write(slow.join("slow.jpg"), "").unwrap();

        let slow_navigation = {
            let explorer = explorer.clone();
            let slow = slow.clone();
            thread::spawn(move || explorer.set_current_path(&slow))
        };
        file_system.entered.wait();
        explorer.set_current_path(&fast).unwrap();
        file_system.release.wait();
        slow_navigation.join().unwrap().unwrap();

        let snapshot = explorer.snapshot();
        assert_eq!(snapshot.current_path, fast);
        assert_eq!(snapshot.listing, ListingState::Ready);
        let names: Vec<&str> = snapshot.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["fast.txt"]);
    }
}

mod listing_tests {
    use super::*;

    #[test]
    fn search_filters_and_sort_orders_the_listing() {
        let fixture = TestFixture::new();
        fixture.explorer.create(EntryKind::File, "Alpha", "aaaa").unwrap();
        fixture.explorer.create(EntryKind::File, "beta", "b").unwrap();
        fixture.explorer.create(EntryKind::Folder, "Music", "").unwrap();

        fixture.explorer.set_search_query("A");
        let by_size = SortPreference {
            by: SortBy::Size,
            order: SortOrder::Desc,
        };
        let names: Vec<String> = fixture
            .explorer
            .visible_files(by_size, false)
            .into_iter()
            .map(|file| file.name)
            .collect();

        assert_eq!(names, vec!["Camera", "Alpha.txt", "beta.txt"]);
        assert_eq!(fixture.explorer.snapshot().files.len(), 5);
    }

    #[test]
    fn hidden_files_need_the_setting() {
        let fixture = TestFixture::new();
        fixture.explorer.create(EntryKind::File, ".secret", "").unwrap();

        let hidden = fixture
            .explorer
            .visible_files(SortPreference::default(), false);
        let shown = fixture
            .explorer
            .visible_files(SortPreference::default(), true);

        assert!(hidden.iter().all(|file| file.name != ".secret"));
        assert!(shown.iter().any(|file| file.name == ".secret"));
    }
}

mod mutation_tests {
    use super::*;

    #[test]
    fn creates_a_text_file_with_content() {
        let fixture = TestFixture::new();

        let path = fixture.explorer.create(EntryKind::File, "note", "hi").unwrap();

        assert_eq!(path, fixture.root().join("note.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hi");
        let entry = fixture
            .explorer
            .snapshot()
            .files
            .into_iter()
            .find(|file| file.name == "note.txt")
            .expect("note.txt should be listed");
        assert!(!entry.is_directory);
        assert_eq!(entry.size, Some(2));
        assert_eq!(entry.extension.as_deref(), Some("txt"));
    }

    #[test]
    fn creates_and_deletes_a_folder() {
        let fixture = TestFixture::new();

        let photos = fixture
            .explorer
            .create(EntryKind::Folder, "Photos", "")
            .unwrap();
        assert!(photos.is_dir());
        assert_eq!(fixture.names(), vec!["Camera", "Documents", "Photos"]);

        fixture.explorer.delete(&photos).unwrap();
        assert!(!photos.exists());
        assert_eq!(fixture.names(), vec!["Camera", "Documents"]);
    }

    #[test]
    fn deleting_the_current_folder_returns_to_its_parent() {
        let fixture = TestFixture::new();
        let photos = fixture
            .explorer
            .create(EntryKind::Folder, "Photos", "")
            .unwrap();
        let trip = photos.join("Trip");
        fs::create_dir_all(&trip).unwrap();
        fixture.explorer.set_current_path(&trip).unwrap();

        fixture.explorer.delete(&photos).unwrap();

        assert_eq!(fixture.explorer.current_path(), fixture.root());
        assert_eq!(fixture.explorer.snapshot().listing, ListingState::Ready);
        assert_eq!(fixture.names(), vec!["Camera", "Documents"]);
    }

    #[test]
    fn renaming_or_moving_the_current_folder_follows_it() {
        let fixture = TestFixture::new();
        let photos = fixture
            .explorer
            .create(EntryKind::Folder, "Photos", "")
            .unwrap();
        fs::write(photos.join("beach.jpg"), "jpg").unwrap();
        fixture.explorer.set_current_path(&photos).unwrap();

        let pictures = fixture.explorer.rename(&photos, "Pictures").unwrap();
        assert_eq!(fixture.explorer.current_path(), pictures);
        assert_eq!(fixture.explorer.snapshot().listing, ListingState::Ready);
        assert_eq!(fixture.names(), vec!["beach.jpg"]);

        let documents = fixture.root().join("Documents");
        let moved = fixture.explorer.move_to(&pictures, &documents).unwrap();
        assert_eq!(moved, documents.join("Pictures"));
        assert_eq!(fixture.explorer.current_path(), moved);
        assert_eq!(fixture.explorer.snapshot().listing, ListingState::Ready);
        assert_eq!(fixture.names(), vec!["beach.jpg"]);
    }

    #[test]
    fn invalid_names_are_rejected() {
        let fixture = TestFixture::new();

        for name in ["", "   ", "a/b", ".."] {
            assert!(matches!(
                fixture.explorer.create(EntryKind::File, name, ""),
                Err(DomainError::InvalidName(_))
            ));
        }
    }

    #[test]
    fn the_root_cannot_be_deleted() {
        let fixture = TestFixture::new();

        assert!(matches!(
            fixture.explorer.delete(&fixture.root()),
            Err(DomainError::ProtectedPath(_))
        ));
        assert!(fixture.root().is_dir());
    }

    #[test]
    fn rename_refuses_existing_targets() {
        let fixture = TestFixture::new();
        let note = fixture.explorer.create(EntryKind::File, "note", "").unwrap();
        fixture.explorer.create(EntryKind::File, "other", "").unwrap();

        let renamed = fixture.explorer.rename(&note, "memo.txt").unwrap();
        assert_eq!(renamed, fixture.root().join("memo.txt"));
        assert!(!note.exists());

        let error = fixture.explorer.rename(&renamed, "other.txt").unwrap_err();
        assert!(is_conflict(&error));
        assert!(renamed.exists());
    }

    #[test]
    fn copy_and_move_between_folders() {
        let fixture = TestFixture::new();
        let note = fixture.explorer.create(EntryKind::File, "note", "hi").unwrap();
        let other = fixture.explorer.create(EntryKind::File, "other", "").unwrap();
        let destination = fixture
            .explorer
            .create(EntryKind::Folder, "Dest", "")
            .unwrap();

        let copy = fixture.explorer.copy_to(&note, &destination).unwrap();
        assert_eq!(copy, destination.join("note.txt"));
        assert!(note.exists());
        assert_eq!(fs::read_to_string(&copy).unwrap(), "hi");

        let error = fixture.explorer.copy_to(&note, &destination).unwrap_err();
        assert!(is_conflict(&error));

        let moved = fixture.explorer.move_to(&other, &destination).unwrap();
        assert!(moved.exists());
        assert!(!other.exists());
        assert_eq!(fixture.names(), vec!["Camera", "Dest", "Documents", "note.txt"]);
    }

    #[test]
    fn folders_cannot_be_nested_in_themselves() {
        let fixture = TestFixture::new();
        let folder = fixture
            .explorer
            .create(EntryKind::Folder, "Box", "")
            .unwrap();

        assert!(matches!(
            fixture.explorer.move_to(&folder, &folder.join("inner")),
            Err(DomainError::SelfNesting(_))
        ));
        assert!(matches!(
            fixture.explorer.copy_to(&folder, &folder),
            Err(DomainError::SelfNesting(_))
        ));
    }

    #[test]
    fn text_files_can_be_edited() {
        let fixture = TestFixture::new();
        let note = fixture.explorer.create(EntryKind::File, "note", "hi").unwrap();

        assert_eq!(fixture.explorer.open_file(&note).unwrap(), PreviewKind::Text);
        fixture.explorer.save_text(&note, "hello world").unwrap();

        assert_eq!(fixture.explorer.read_text(&note).unwrap(), "hello world");
        let size = fixture
            .explorer
            .snapshot()
            .files
            .into_iter()
            .find(|file| file.uri == note)
            .and_then(|file| file.size);
        assert_eq!(size, Some(11));
    }
}

mod recent_files_tests {
    use super::*;

    #[test]
    fn opened_files_are_remembered_across_restarts() {
        let fixture = TestFixture::new();
        let first = fixture.explorer.create(EntryKind::File, "first", "").unwrap();
        let second = fixture.explorer.create(EntryKind::File, "second", "").unwrap();

        fixture.explorer.open_file(&first).unwrap();
        fixture.explorer.open_file(&second).unwrap();
        fixture.explorer.open_file(&first).unwrap();
        assert_eq!(fixture.explorer.recent_files(), vec![first.clone(), second.clone()]);

        let restarted = fixture.restart();
        assert_eq!(restarted.recent_files(), vec![first, second]);
    }

    #[test]
    fn restore_drops_files_that_disappeared() {
        let fixture = TestFixture::new();
        let kept = fixture.explorer.create(EntryKind::File, "kept", "").unwrap();
        let gone = fixture.explorer.create(EntryKind::File, "gone", "").unwrap();
        fixture.explorer.add_to_recent(&kept);
        fixture.explorer.add_to_recent(&gone);

        fs::remove_file(&gone).unwrap();

        assert_eq!(fixture.restart().recent_files(), vec![kept]);
    }

    #[test]
    fn rename_and_delete_keep_recent_files_accurate() {
        let fixture = TestFixture::new();
        let note = fixture.explorer.create(EntryKind::File, "note", "").unwrap();
        fixture.explorer.open_file(&note).unwrap();

        let renamed = fixture.explorer.rename(&note, "memo").unwrap();
        assert_eq!(fixture.explorer.recent_files(), vec![renamed.clone()]);

        fixture.explorer.delete(&renamed).unwrap();
        assert!(fixture.explorer.recent_files().is_empty());
        assert!(fixture.restart().recent_files().is_empty());
    }

    #[test]
    fn renaming_onto_a_stale_entry_keeps_paths_unique() {
        let fixture = TestFixture::new();
        let b = fixture.explorer.create(EntryKind::File, "b.txt", "").unwrap();
        let a = fixture.explorer.create(EntryKind::File, "a.txt", "").unwrap();
        fixture.explorer.open_file(&b).unwrap();
        fixture.explorer.open_file(&a).unwrap();
        fs::remove_file(&b).unwrap();

        let renamed = fixture.explorer.rename(&a, "b.txt").unwrap();

        assert_eq!(renamed, b);
        assert_eq!(fixture.explorer.recent_files(), vec![b.clone()]);
        assert_eq!(fixture.restart().recent_files(), vec![b]);
    }

    #[test]
    fn keeps_only_the_ten_most_recent() {
        let fixture = TestFixture::new();
        let files: Vec<PathBuf> = (0..12)
            .map(|index| {
                fixture
                    .explorer
                    .create(EntryKind::File, &format!("file{index}"), "")
                    .unwrap()
            })
            .collect();

        for file in &files {
            fixture.explorer.add_to_recent(file);
        }

        let recent = fixture.explorer.recent_files();
        assert_eq!(recent.len(), 10);
        assert_eq!(recent.first(), files.last());
        assert!(!recent.contains(&files[0]));
        assert_eq!(fixture.explorer.snapshot().recent_files, recent);
    }
}

mod media_tests {
    use super::*;

    #[test]
    fn imports_a_picked_document() {
        let fixture = TestFixture::new();
        let source = fixture.outside_file("report.pdf", "pdf bytes");
        let picker = FakePicker {
            document: Some(PickedDocument {
                uri: source.clone(),
                name: "report.pdf".to_string(),
                mime_type: Some("application/pdf".to_string()),
            }),
        };

        let imported = fixture.explorer.import_document(&picker).unwrap();

        let target = fixture.root().join("report.pdf");
        assert_eq!(imported, Some(target.clone()));
        assert_eq!(fs::read_to_string(&target).unwrap(), "pdf bytes");
        assert!(source.exists());
        assert!(fixture.names().contains(&"report.pdf".to_string()));

        let again = fixture.explorer.import_document(&picker).unwrap_err();
        assert!(is_conflict(&again));
    }

    #[test]
    fn cancelled_import_changes_nothing() {
        let fixture = TestFixture::new();

        let imported = fixture
            .explorer
            .import_document(&FakePicker { document: None })
            .unwrap();

        assert_eq!(imported, None);
        assert_eq!(fixture.names(), vec!["Camera", "Documents"]);
    }

    #[test]
    fn captured_photos_land_in_the_current_folder_and_gallery() {
        let fixture = TestFixture::new();
        let camera_directory = fixture.root().join("Camera");
        fixture.explorer.set_current_path(&camera_directory).unwrap();
        let camera = FakeCamera {
            photo: Some(fixture.outside_file("capture.jpg", "jpeg")),
        };
        let gallery = RecordingGallery::default();

        let photo = fixture.explorer.capture_photo(&camera, &gallery).unwrap();

        assert_eq!(photo.parent(), Some(camera_directory.as_path()));
        let name = photo.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("IMG_"));
        assert!(name.ends_with(".jpg"));
        assert!(!name.contains(':'));
        assert_eq!(fs::read_to_string(&photo).unwrap(), "jpeg");
        assert_eq!(*gallery.saved.lock(), vec![photo]);
        assert_eq!(fixture.names(), vec![name]);
    }

    #[test]
    fn gallery_failure_does_not_fail_the_capture() {
        let fixture = TestFixture::new();
        let camera = FakeCamera {
            photo: Some(fixture.outside_file("capture.jpg", "jpeg")),
        };
        let gallery = RecordingGallery {
            fail: true,
            ..RecordingGallery::default()
        };

        let photo = fixture.explorer.capture_photo(&camera, &gallery).unwrap();

        assert!(photo.exists());
    }

    #[test]
    fn camera_failure_is_reported() {
        let fixture = TestFixture::new();

        let result = fixture
            .explorer
            .capture_photo(&FakeCamera { photo: None }, &RecordingGallery::default());

        assert!(matches!(result, Err(DomainError::Capture(_))));
        assert_eq!(fixture.names(), vec!["Camera", "Documents"]);
    }
}

mod settings_tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_stored() {
        let fixture = TestFixture::new();
        let service = SettingsService::new(fixture.store.clone());

        assert_eq!(service.settings(), Settings::default());
    }

    #[test]
    fn stored_fields_merge_over_defaults() {
        let fixture = TestFixture::new();
        fixture.store.set("settings", r#"{"gridView":true}"#).unwrap();

        let settings = SettingsService::new(fixture.store.clone()).settings();

        assert!(settings.grid_view);
        assert_eq!(settings.theme, ThemeMode::Light);
        assert!(!settings.show_hidden_files);
        assert_eq!(settings.default_sort, SortPreference::default());
    }

    #[test]
    fn unknown_values_only_reset_their_own_field() {
        let fixture = TestFixture::new();
        fixture
            .store
            .set("settings", r#"{"gridView":true,"theme":"sepia"}"#)
            .unwrap();

        let settings = SettingsService::new(fixture.store.clone()).settings();

        assert!(settings.grid_view);
        assert_eq!(settings.theme, ThemeMode::Light);
    }

    #[test]
    fn malformed_record_falls_back_to_defaults() {
        let fixture = TestFixture::new();
        fixture.store.set("settings", "{not json").unwrap();

        let settings = SettingsService::new(fixture.store.clone()).settings();

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn updates_are_persisted() {
        let fixture = TestFixture::new();
        let service = SettingsService::new(fixture.store.clone());

        let updated = service.update_settings(SettingsPatch {
            theme: Some(ThemeMode::Dark),
            default_sort: Some(SortPreference {
                by: SortBy::Date,
                order: SortOrder::Desc,
            }),
            ..SettingsPatch::default()
        });

        assert_eq!(updated.theme, ThemeMode::Dark);
        let reloaded = SettingsService::new(fixture.store.clone()).settings();
        assert_eq!(reloaded, updated);
        assert_eq!(reloaded.default_sort.by, SortBy::Date);
    }

    #[test]
    fn reset_restores_and_persists_defaults() {
        let fixture = TestFixture::new();
        let service = SettingsService::new(fixture.store.clone());
        service.update_settings(SettingsPatch {
            grid_view: Some(true),
            auto_backup: Some(true),
            ..SettingsPatch::default()
        });

        assert_eq!(service.reset_settings(), Settings::default());
        assert_eq!(
            SettingsService::new(fixture.store.clone()).settings(),
            Settings::default()
        );
    }
}
