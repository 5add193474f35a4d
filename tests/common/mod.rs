//! Helpers for integration tests.

use std::path::{Path, PathBuf};

use diesel_migrations::MigrationHarness;
use tempfile::TempDir;

use pushkind_common::db::{DbPool, establish_connection_pool};
use sales_dashboard::MIGRATIONS;

/// Temporary database used in integration tests.
///
/// Lives in its own temporary directory, removed together with any
/// `-shm`/`-wal` side files when the value is dropped.
pub struct TestDb {
    pool: DbPool,
    path: PathBuf,
    _dir: TempDir, // dropped last, after the pool has closed its connections
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("Temporary path is not valid UTF-8.");

        let pool = establish_connection_pool(url).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            pool,
            path,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
