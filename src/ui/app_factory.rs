use crate::config::app_config::AppConfig;
use crate::domain::entities::sandbox::Sandbox;
use crate::domain::ports::primary::file_explorer_use_case::FileExplorerUseCase;
use crate::domain::ports::primary::settings_use_case::SettingsUseCase;
use crate::domain::ports::secondary::camera::Camera;
use crate::domain::ports::secondary::document_picker::DocumentPicker;
use crate::domain::ports::secondary::media_library::MediaLibrary;
use crate::domain::services::file_explorer_service::FileExplorerService;
use crate::domain::services::settings_service::SettingsService;
use crate::infrastructure::database::pool::SqliteRepositoryPool;
use crate::infrastructure::database::sqlite_key_value_store::SqliteKeyValueStore;
use crate::infrastructure::filesystem::local_file_system::LocalFileSystem;
use crate::infrastructure::filesystem::native_document_picker::NativeDocumentPicker;
use crate::infrastructure::media::gallery_directory::GalleryDirectory;
use crate::infrastructure::media::image_file_camera::ImageFileCamera;
use crate::utils::dialogs::popup_error_and_exit;
use std::fs;
use std::sync::Arc;

pub struct FileExplorerAppService {
    pub explorer_use_case: Arc<dyn FileExplorerUseCase>,
    pub settings_use_case: Arc<dyn SettingsUseCase>,
    pub document_picker: Arc<dyn DocumentPicker>,
    pub camera: Arc<dyn Camera>,
    pub media_library: Arc<dyn MediaLibrary>,
}

impl FileExplorerAppService {
    #[must_use]
    pub fn create(config: &AppConfig) -> Self {
        fs::create_dir_all(&config.home).unwrap_or_else(|error| popup_error_and_exit(error));

        // One pool shared by settings and recent files
        let pool = SqliteRepositoryPool::new(&config.database_url)
            .unwrap_or_else(|error| popup_error_and_exit(error));
        let store = Arc::new(SqliteKeyValueStore::new(pool));

        let explorer_service = Arc::new(FileExplorerService::new(
            Arc::new(LocalFileSystem),
            store.clone(),
            Sandbox::new(&config.home),
        ));
        let settings_service = Arc::new(SettingsService::new(store));

        Self {
            explorer_use_case: explorer_service,
            settings_use_case: settings_service,
            document_picker: Arc::new(NativeDocumentPicker),
            camera: Arc::new(ImageFileCamera),
            media_library: Arc::new(GalleryDirectory::new(config.gallery.clone())),
        }
    }
}
