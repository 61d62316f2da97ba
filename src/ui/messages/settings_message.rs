use crate::domain::entities::settings::ThemeMode;
use crate::domain::entities::sort::SortBy;

#[derive(Clone, Debug)]
pub enum SettingsMessage {
    ThemeSelected(ThemeMode),
    ShowHiddenFilesToggled(bool),
    GridViewToggled(bool),
    AutoBackupToggled(bool),
    SortBySelected(SortBy),
    SortOrderToggled,
    Reset,
}
