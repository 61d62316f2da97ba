use crate::domain::errors::persistence_error::PersistenceError;

/// Durable string storage backing settings and the recent-files list.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}
