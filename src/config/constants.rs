use diesel_migrations::{embed_migrations, EmbeddedMigrations};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub const APP_DIRECTORY_NAME: &str = "FileExplorer";
pub const CAMERA_DIRECTORY_NAME: &str = "Camera";
pub const DOCUMENTS_DIRECTORY_NAME: &str = "Documents";

pub const SETTINGS_KEY: &str = "settings";
pub const RECENT_FILES_KEY: &str = "recentFiles";

pub const MAX_RECENT_FILES: usize = 10;
pub const DEFAULT_FILE_EXTENSION: &str = "txt";
pub const PHOTO_PREFIX: &str = "IMG_";
pub const PHOTO_EXTENSION: &str = "jpg";
pub const ROOT_DIRECTORY_TITLE: &str = "Root";
