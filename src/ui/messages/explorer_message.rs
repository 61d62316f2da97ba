use crate::domain::entities::file_entry::FileEntry;
use crate::domain::entities::media::EntryKind;
use crate::domain::entities::navigation::NavigationSnapshot;
use iced::widget::text_editor;
use std::path::PathBuf;

/// Text content of an opened file, `None` when it has no in-app preview.
pub type OpenedFile = (PathBuf, Option<String>);

#[derive(Clone, Debug)]
pub enum ExplorerMessage {
    SnapshotChanged(NavigationSnapshot),
    Refresh,
    Finished(Result<(), String>),
    EntryPressed(FileEntry),
    RecentPressed(PathBuf),
    Opened(Result<OpenedFile, String>),
    BackPressed,
    SearchChanged(String),
    SearchClear,
    NewNameChanged(String),
    CreatePressed(EntryKind),
    Created(Result<PathBuf, String>),
    DeletePressed(PathBuf),
    Selected(PathBuf),
    RenameInputChanged(String),
    RenameSubmit,
    Renamed(Result<PathBuf, String>),
    DestinationChanged(String),
    CopySubmit,
    MoveSubmit,
    Moved(Result<PathBuf, String>),
    ImportPressed,
    Imported(Result<Option<PathBuf>, String>),
    CapturePressed,
    Captured(Result<PathBuf, String>),
    PreviewEdited(text_editor::Action),
    PreviewSave,
    PreviewSaved(Result<(), String>),
    PreviewClose,
}
