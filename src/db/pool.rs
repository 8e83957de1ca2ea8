//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database and bring its schema up to date.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }
}
