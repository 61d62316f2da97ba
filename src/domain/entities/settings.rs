use crate::domain::entities::sort::SortPreference;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    Auto,
}

/// User preferences persisted under the `settings` key.
///
/// Use [`Settings::from_stored`] to read a stored record: it merges field by
/// field, so a missing or unreadable field falls back to its default alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub theme: ThemeMode,
    pub show_hidden_files: bool,
    pub default_sort: SortPreference,
    pub grid_view: bool,
    pub auto_backup: bool,
}

/// Partial update of [`Settings`]; `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub theme: Option<ThemeMode>,
    pub show_hidden_files: Option<bool>,
    pub default_sort: Option<SortPreference>,
    pub grid_view: Option<bool>,
    pub auto_backup: Option<bool>,
}

impl Settings {
    /// Merges a stored JSON record over the defaults.
    ///
    /// Unknown keys are ignored and a known key whose value cannot be read
    /// (e.g. a theme written by a newer version) keeps its default.
    ///
    /// # Errors
    ///
    /// Fails when `json` is not a JSON object.
    pub fn from_stored(json: &str) -> Result<Self, serde_json::Error> {
        let stored: Map<String, Value> = serde_json::from_str(json)?;
        let defaults = Self::default();

        let default_sort = match stored.get("defaultSort") {
            Some(Value::Object(sort)) => SortPreference {
                by: field(sort, "by", defaults.default_sort.by),
                order: field(sort, "order", defaults.default_sort.order),
            },
            _ => defaults.default_sort,
        };

        Ok(Self {
            theme: field(&stored, "theme", defaults.theme),
            show_hidden_files: field(&stored, "showHiddenFiles", defaults.show_hidden_files),
            default_sort,
            grid_view: field(&stored, "gridView", defaults.grid_view),
            auto_backup: field(&stored, "autoBackup", defaults.auto_backup),
        })
    }

    #[must_use]
    pub fn merged(&self, patch: SettingsPatch) -> Self {
        Self {
            theme: patch.theme.unwrap_or(self.theme),
            show_hidden_files: patch.show_hidden_files.unwrap_or(self.show_hidden_files),
            default_sort: patch.default_sort.unwrap_or(self.default_sort),
            grid_view: patch.grid_view.unwrap_or(self.grid_view),
            auto_backup: patch.auto_backup.unwrap_or(self.auto_backup),
        }
    }
}

fn field<T: DeserializeOwned>(record: &Map<String, Value>, key: &str, fallback: T) -> T {
    record
        .get(key)
        .and_then(|value| T::deserialize(value).ok())
        .unwrap_or(fallback)
}
