use crate::config::constants::SETTINGS_KEY;
use crate::domain::entities::settings::{Settings, SettingsPatch};
use crate::domain::errors::persistence_error::PersistenceError;
use crate::domain::ports::primary::settings_use_case::SettingsUseCase;
use crate::domain::ports::secondary::key_value_store::KeyValueStore;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::warn;

pub struct SettingsService {
    store: Arc<dyn KeyValueStore>,
    current: Mutex<Settings>,
}

impl SettingsService {
    /// Loads the stored settings over the defaults. A missing or unreadable
    /// record leaves the defaults in place.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let settings = Self::load(store.as_ref()).unwrap_or_else(|err| {
            warn!(error = %err, "Failed to load settings, using defaults");
            Settings::default()
        });
        Self {
            store,
            current: Mutex::new(settings),
        }
    }

    fn load(store: &dyn KeyValueStore) -> Result<Settings, PersistenceError> {
        match store.get(SETTINGS_KEY)? {
            Some(json) => Ok(Settings::from_stored(&json)?),
            None => Ok(Settings::default()),
        }
    }

    fn save(&self, settings: &Settings) {
        let result = serde_json::to_string(settings)
            .map_err(PersistenceError::from)
            .and_then(|json| self.store.set(SETTINGS_KEY, &json));
        if let Err(err) = result {
            warn!(error = %err, "Failed to save settings");
        }
    }

    fn replace(&self, settings: Settings) -> Settings {
        *self.current.lock() = settings.clone();
        self.save(&settings);
        settings
    }
}

impl SettingsUseCase for SettingsService {
    fn settings(&self) -> Settings {
        self.current.lock().clone()
    }

    fn update_settings(&self, patch: SettingsPatch) -> Settings {
        let updated = self.current.lock().merged(patch);
        self.replace(updated)
    }

    fn reset_settings(&self) -> Settings {
        self.replace(Settings::default())
    }
}
