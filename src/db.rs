// src/db.rs

use crate::error::{MlogError, Result};
use log::{error, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS entries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        created_at TEXT NOT NULL,
        message TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS tags (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE
    );
    CREATE TABLE IF NOT EXISTS entry_tags (
        entry_id INTEGER NOT NULL REFERENCES entries(id),
        tag_id INTEGER NOT NULL REFERENCES tags(id),
        PRIMARY KEY (entry_id, tag_id)
    );
    CREATE INDEX IF NOT EXISTS idx_entry_tags_tag ON entry_tags(tag_id);
    CREATE INDEX IF NOT EXISTS idx_entries_created ON entries(created_at);
";

/// Standard database location (~/.config/mlog/mlog.db)
pub fn default_db_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(MlogError::HomeDirNotFound)?;
    Ok(home_dir.join(".config/mlog/mlog.db"))
}

/// Opens the database file, creating its directory and schema when missing.
pub fn open_db(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let conn = Connection::open(path).map_err(|err| {
        error!(
            "event=db_open module=db status=error path={} error={}",
            path.display(),
            err
        );
        MlogError::Storage(err)
    })?;
    bootstrap(&conn)?;
    info!("event=db_open module=db status=ok path={}", path.display());
    Ok(conn)
}

pub fn open_db_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    bootstrap(&conn)?;
    Ok(conn)
}

fn bootstrap(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
