use std::path::PathBuf;

/// A photo written by the camera to a temporary location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedPhoto {
    pub uri: PathBuf,
}

/// A file chosen through the document picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickedDocument {
    pub uri: PathBuf,
    pub name: String,
    pub mime_type: Option<String>,
}

/// Filter handed to the document picker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DocumentFilter {
    #[default]
    Any,
    Extensions(Vec<String>),
}

/// What the create dialog asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
}
