// src/store.rs
//
// Entry store. Every function here assumes the caller holds the transaction
// that makes the whole logical operation atomic (see `Logbook`).

use crate::datetime;
use crate::error::{MlogError, Result};
use crate::models::{EntryId, LogEntry, Tag};
use crate::tags;
use chrono::{NaiveDateTime, SubsecRound};
use log::info;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeSet;

/// Returns the message as it will be stored, or a validation error when it is
/// blank.
pub fn validate_message(message: &str) -> Result<&str> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(MlogError::Validation("Log message must not be empty".to_string()));
    }
    Ok(trimmed)
}

/// Inserts a new entry stamped with the current time.
pub fn create(conn: &Connection, message: &str, tags: &BTreeSet<Tag>) -> Result<LogEntry> {
    create_at(conn, message, tags, datetime::now())
}

/// Inserts a new entry with an explicit creation time.
pub fn create_at(
    conn: &Connection,
    message: &str,
    tags: &BTreeSet<Tag>,
    created_at: NaiveDateTime,
) -> Result<LogEntry> {
    let message = validate_message(message)?;
    // Whole seconds, matching the display and date-filter precision.
    let created_at = created_at.trunc_subsecs(0);
    conn.execute(
        "INSERT INTO entries (created_at, message) VALUES (?1, ?2)",
        params![created_at, message],
    )?;
    let id = conn.last_insert_rowid();
    attach(conn, id, tags)?;
    info!(
        "event=entry_create module=store status=ok id={} tags={}",
        id,
        tags.len()
    );

    Ok(LogEntry {
        id,
        message: message.to_string(),
        created_at,
        tags: tags.iter().cloned().collect(),
    })
}

/// Loads one entry with its tags.
pub fn get(conn: &Connection, id: EntryId) -> Result<LogEntry> {
    let row = conn
        .query_row(
            "SELECT created_at, message FROM entries WHERE id = ?1",
            [id],
            |row| Ok((row.get::<_, NaiveDateTime>(0)?, row.get::<_, String>(1)?)),
        )
        .optional()?;
    let (created_at, message) = row.ok_or(MlogError::NotFound(id))?;

    Ok(LogEntry {
        id,
        message,
        created_at,
        tags: tags::tags_for_entry(conn, id)?,
    })
}

/// Replaces the message and/or the whole tag set of an entry.
///
/// `None` leaves the corresponding field untouched; `Some(empty set)` detaches
/// every tag. Tags dropped from the entry are released when orphaned.
pub fn update(
    conn: &Connection,
    id: EntryId,
    new_message: Option<&str>,
    new_tags: Option<&BTreeSet<Tag>>,
) -> Result<LogEntry> {
    let current = get(conn, id)?;

    if let Some(message) = new_message {
        let message = validate_message(message)?;
        conn.execute(
            "UPDATE entries SET message = ?1 WHERE id = ?2",
            params![message, id],
        )?;
    }

    if let Some(new_tags) = new_tags {
        conn.execute("DELETE FROM entry_tags WHERE entry_id = ?1", [id])?;
        attach(conn, id, new_tags)?;
        for old in current.tags.iter().filter(|t| !new_tags.contains(*t)) {
            tags::release_if_orphan(conn, old)?;
        }
    }

    info!("event=entry_update module=store status=ok id={}", id);
    get(conn, id)
}

/// Removes an entry and its associations, releasing tags it alone used.
pub fn delete(conn: &Connection, id: EntryId) -> Result<LogEntry> {
    let entry = get(conn, id)?;
    conn.execute("DELETE FROM entry_tags WHERE entry_id = ?1", [id])?;
    conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
    for tag in &entry.tags {
        tags::release_if_orphan(conn, tag)?;
    }
    info!("event=entry_delete module=store status=ok id={}", id);
    Ok(entry)
}

fn attach(conn: &Connection, id: EntryId, tags: &BTreeSet<Tag>) -> Result<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT OR IGNORE INTO entry_tags (entry_id, tag_id) VALUES (?1, ?2)",
    )?;
    for tag in tags {
        stmt.execute(params![id, tag.id])?;
    }
    Ok(())
}
