//! Shared fixtures for integration tests.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use drone_inventory::db::{DbPool, establish_connection_pool};
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// A throwaway SQLite database with all migrations applied.
///
/// The backing file lives for as long as the fixture; dropping it removes
/// the database.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("should create temp database file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("should establish SQLite connection");
        let mut conn = pool
            .get()
            .expect("should get SQLite connection from pool");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("migrations should apply");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
