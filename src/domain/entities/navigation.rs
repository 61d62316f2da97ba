use crate::domain::entities::file_entry::FileEntry;
use std::path::PathBuf;

/// Status of the listing of `current_path`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListingState {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(String),
}

/// Read-only view of the navigation state, published to subscribers after
/// every change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationSnapshot {
    pub current_path: PathBuf,
    /// Exactly the result of the most recent successful listing.
    pub files: Vec<FileEntry>,
    pub listing: ListingState,
    pub search_query: String,
    pub recent_files: Vec<PathBuf>,
}

impl NavigationSnapshot {
    #[must_use]
    pub fn new(current_path: PathBuf) -> Self {
        Self {
            current_path,
            files: Vec::new(),
            listing: ListingState::Idle,
            search_query: String::new(),
            recent_files: Vec::new(),
        }
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.listing == ListingState::Loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.listing {
            ListingState::Error(message) => Some(message),
            _ => None,
        }
    }
}
