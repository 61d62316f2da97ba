use std::env;
use std::path::PathBuf;

const HOME_VARIABLE: &str = "FILE_EXPLORER_HOME";
const DATABASE_VARIABLE: &str = "FILE_EXPLORER_DATABASE";
const GALLERY_VARIABLE: &str = "FILE_EXPLORER_GALLERY";
const LOG_VARIABLE: &str = "FILE_EXPLORER_LOG";

const APPLICATION_FOLDER: &str = "file-explorer";
const DATABASE_FILE: &str = "app.db";
const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration of the desktop application.
///
/// Every value can be overridden through an environment variable; the
/// defaults follow the platform conventions exposed by [`dirs`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory in which the `FileExplorer/` sandbox lives.
    pub home: PathBuf,
    pub database_url: String,
    /// Directory used as the media library ("save to gallery").
    pub gallery: PathBuf,
    pub log_filter: String,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let home = absolute_home(
            env::var_os(HOME_VARIABLE)
                .map(PathBuf::from)
                .unwrap_or_else(default_home),
        );

        let database_url = env::var(DATABASE_VARIABLE)
            .unwrap_or_else(|_| home.join(DATABASE_FILE).to_string_lossy().into_owned());

        let gallery = env::var_os(GALLERY_VARIABLE)
            .map(PathBuf::from)
            .or_else(dirs::picture_dir)
            .unwrap_or_else(|| home.join("Gallery"));

        let log_filter =
            env::var(LOG_VARIABLE).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Self {
            home,
            database_url,
            gallery,
            log_filter,
        }
    }
}

fn default_home() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APPLICATION_FOLDER)
}

/// Anchors a relative home at the working directory, so leading `..`
/// components are kept when the sandbox path is normalized.
fn absolute_home(home: PathBuf) -> PathBuf {
    std::path::absolute(&home).unwrap_or(home)
}
