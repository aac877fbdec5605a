//! SQLite connection pooling.

use diesel::SqliteConnection;
use diesel::r2d2::{self, ConnectionManager};

/// Connection pool shared across request handlers.
pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
/// A pooled SQLite connection.
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

/// Builds an r2d2 pool for the given SQLite database URL.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, r2d2::PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    r2d2::Pool::builder().build(manager)
}
