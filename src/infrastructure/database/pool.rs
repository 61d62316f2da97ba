use crate::config::constants::MIGRATIONS;
use crate::domain::errors::persistence_error::PersistenceError;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel_migrations::MigrationHarness;
use std::sync::Arc;

type DieselPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DieselConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Per-connection settings; PRAGMAs like `busy_timeout` do not persist in
/// the database file.
#[derive(Debug)]
struct ConnectionOptions;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA busy_timeout = 5000;")
            .map_err(r2d2::Error::QueryError)
    }
}

/// Connection pool shared by the `SQLite` backed stores.
///
/// Applies PRAGMA tuning and runs the embedded migrations once, when the
/// pool is created.
pub struct SqliteRepositoryPool {
    pool: DieselPool,
}

impl SqliteRepositoryPool {
    /// Opens (or creates) the database at `database_url`.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] if:
    /// - A [`ConnectionPool`](PersistenceError::ConnectionPool) error occurs while building the pool.
    /// - A [`Database`](PersistenceError::Database) error occurs while applying pragmas.
    /// - A [`Migration`](PersistenceError::Migration) error occurs while running migrations.
    pub fn new(database_url: &str) -> Result<Arc<Self>, PersistenceError> {
        let pool = Self::create_pool(database_url)?;
        {
            let mut conn = pool.get().map_err(PersistenceError::ConnectionPool)?;
            Self::apply_pragmas(&mut conn)?;
            Self::run_migrations(&mut conn)?;
        }
        Ok(Arc::new(Self { pool }))
    }

    fn create_pool(database_url: &str) -> Result<DieselPool, PersistenceError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        Pool::builder()
            .connection_customizer(Box::new(ConnectionOptions))
            .build(manager)
            .map_err(PersistenceError::ConnectionPool)
    }

    fn apply_pragmas(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
        let pragmas = [
            "PRAGMA journal_mode = WAL;",
            "PRAGMA synchronous = NORMAL;",
        ];
        for pragma in pragmas {
            diesel::sql_query(pragma)
                .execute(conn)
                .map_err(PersistenceError::Database)?;
        }
        Ok(())
    }

    fn run_migrations(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|err| PersistenceError::Migration(err.to_string()))?;
        Ok(())
    }

    fn get_connection(&self) -> Result<DieselConnection, PersistenceError> {
        self.pool.get().map_err(PersistenceError::ConnectionPool)
    }

    /// Executes a database operation with automatic connection management.
    pub(crate) fn execute_db_operation<F, R>(&self, operation: F) -> Result<R, PersistenceError>
    where
        F: FnOnce(&mut DieselConnection) -> Result<R, PersistenceError>,
    {
        let mut conn = self.get_connection()?;
        operation(&mut conn)
    }
}
