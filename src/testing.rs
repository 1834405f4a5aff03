//! Test utilities for database setup.
//!
//! Reuses the authoritative schema initialization so test code never
//! duplicates table definitions.

use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use crate::db::DbPool;

/// Test environment with a store initialized by the real migrations.
///
/// The temporary directory is kept alive so the database file outlives
/// the setup call and is cleaned up on drop.
pub struct TestEnv {
    pub temp: TempDir,
    pub conn: Connection,
}

impl TestEnv {
    pub fn new() -> rusqlite::Result<Self> {
        let temp =
            TempDir::new().map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let db_path = temp.path().join("tembea.db");
        let conn = Connection::open(&db_path)?;
        crate::db::schema::run_migrations(&conn)?;

        Ok(Self { temp, conn })
    }
}

/// In-memory pool for service- and route-level tests.
pub fn test_pool() -> DbPool {
    let conn = Connection::open_in_memory().expect("open in-memory database");
    crate::db::schema::run_migrations(&conn).expect("run migrations");
    Arc::new(Mutex::new(conn))
}
