use crate::domain::errors::persistence_error::PersistenceError;
use crate::domain::ports::secondary::key_value_store::KeyValueStore;
use crate::infrastructure::database::pool::SqliteRepositoryPool;
use crate::infrastructure::database::schema::key_value_store;
use diesel::prelude::*;
use std::sync::Arc;

/// [`KeyValueStore`] backed by the `key_value_store` table.
pub struct SqliteKeyValueStore {
    pool: Arc<SqliteRepositoryPool>,
}

impl SqliteKeyValueStore {
    #[must_use]
    pub const fn new(pool: Arc<SqliteRepositoryPool>) -> Self {
        Self { pool }
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    /// Returns the stored value, or `None` when the key was never written.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] if:
    /// - A [`ConnectionPool`](PersistenceError::ConnectionPool) error occurs while acquiring a connection.
    /// - A [`Database`](PersistenceError::Database) error occurs during query execution.
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.pool.execute_db_operation(|conn| {
            let value = key_value_store::table
                .filter(key_value_store::key.eq(key))
                .select(key_value_store::value)
                .first::<String>(conn)
                .optional()?;
            Ok(value)
        })
    }

    /// Replaces any existing value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] if:
    /// - A [`ConnectionPool`](PersistenceError::ConnectionPool) error occurs while acquiring a connection.
    /// - A [`Database`](PersistenceError::Database) error occurs during the update operation.
    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.pool.execute_db_operation(|conn| {
            diesel::replace_into(key_value_store::table)
                .values((
                    key_value_store::key.eq(key),
                    key_value_store::value.eq(value),
                ))
                .execute(conn)?;
            Ok(())
        })
    }
}
