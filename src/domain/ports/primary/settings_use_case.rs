use crate::domain::entities::settings::{Settings, SettingsPatch};

/// Settings are best-effort durable: storage failures are logged and the
/// in-memory value stays authoritative.
pub trait SettingsUseCase: Send + Sync {
    fn settings(&self) -> Settings;

    /// Merges `patch` into the current settings and persists the result.
    fn update_settings(&self, patch: SettingsPatch) -> Settings;

    fn reset_settings(&self) -> Settings;
}
