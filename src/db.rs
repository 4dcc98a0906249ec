//! Connection pool construction for the SQLite store.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Bounds applied to the shared connection pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Ceiling on concurrently open connections.
    pub max_open: u32,
    /// Idle connections kept warm by the pool.
    pub max_idle: u32,
    /// Age after which a connection is discarded and replaced.
    pub max_lifetime: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_open: 10,
            max_idle: 5,
            max_lifetime: Duration::from_secs(5 * 60),
        }
    }
}

/// Pragmas applied to every connection handed out by the pool.
#[derive(Debug)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000; PRAGMA journal_mode = WAL;",
        )
        .map_err(r2d2::Error::QueryError)
    }
}

/// Build a bounded pool for the SQLite database at `database_url`.
pub fn establish_connection_pool(
    database_url: &str,
    config: &PoolConfig,
) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    r2d2::Pool::builder()
        .max_size(config.max_open)
        .min_idle(Some(config.max_idle.min(config.max_open)))
        .max_lifetime(Some(config.max_lifetime))
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)
}
