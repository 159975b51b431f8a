// src/tags.rs

//! Tag registry: canonical tag names, lazy creation and orphan cleanup.
//!
//! Names are trimmed and lower-cased before every lookup or insert, so
//! `"Foo"`, `" foo "` and `"FOO"` all resolve to the same row. A tag row
//! exists only while at least one entry references it; callers that detach
//! tags must call [`release_if_orphan`] inside the same transaction.

use crate::error::{MlogError, Result};
use crate::models::{EntryId, Tag, TagCount};
use log::debug;
use rusqlite::{params, Connection};
use std::collections::BTreeSet;

/// Trims and lower-cases a raw tag name. Blank names are rejected.
pub fn normalize_tag(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MlogError::Validation(format!(
            "Tag names must not be empty (got {:?})",
            raw
        )));
    }
    Ok(trimmed.to_lowercase())
}

/// Normalizes and deduplicates a list of raw names.
pub fn normalize_tags<S: AsRef<str>>(raw_names: &[S]) -> Result<BTreeSet<String>> {
    raw_names
        .iter()
        .map(|raw| normalize_tag(raw.as_ref()))
        .collect()
}

/// Looks up or creates a tag for each name. Duplicates collapse to one tag.
///
/// All names are validated before anything is written.
pub fn resolve<S: AsRef<str>>(conn: &Connection, raw_names: &[S]) -> Result<BTreeSet<Tag>> {
    let names = normalize_tags(raw_names)?;
    let mut resolved = BTreeSet::new();
    for name in names {
        let inserted = conn.execute("INSERT OR IGNORE INTO tags (name) VALUES (?1)", [&name])?;
        if inserted > 0 {
            debug!("event=tag_create module=tags name={}", name);
        }
        let id: i64 = conn.query_row("SELECT id FROM tags WHERE name = ?1", [&name], |row| {
            row.get(0)
        })?;
        resolved.insert(Tag { name, id });
    }
    Ok(resolved)
}

/// Deletes `tag` if no entry references it anymore. Returns whether it was
/// deleted.
pub fn release_if_orphan(conn: &Connection, tag: &Tag) -> Result<bool> {
    let deleted = conn.execute(
        "DELETE FROM tags
         WHERE id = ?1
           AND NOT EXISTS (SELECT 1 FROM entry_tags WHERE tag_id = ?1)",
        [tag.id],
    )?;
    if deleted > 0 {
        debug!("event=tag_release module=tags name={}", tag.name);
    }
    Ok(deleted > 0)
}

/// Every tag with the number of entries referencing it, ordered by name.
pub fn all_with_counts(conn: &Connection) -> Result<Vec<TagCount>> {
    let mut stmt = conn.prepare(
        "SELECT t.name, COUNT(et.entry_id)
         FROM tags t
         LEFT JOIN entry_tags et ON et.tag_id = t.id
         GROUP BY t.id, t.name
         ORDER BY t.name ASC",
    )?;
    let counts = stmt
        .query_map([], |row| {
            Ok(TagCount {
                name: row.get(0)?,
                count: row.get(1)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(counts)
}

/// Tags attached to one entry, sorted by name.
pub fn tags_for_entry(conn: &Connection, entry_id: EntryId) -> Result<Vec<Tag>> {
    let mut stmt = conn.prepare(
        "SELECT t.id, t.name
         FROM entry_tags et
         INNER JOIN tags t ON t.id = et.tag_id
         WHERE et.entry_id = ?1
         ORDER BY t.name ASC",
    )?;
    let tags = stmt
        .query_map(params![entry_id], |row| {
            Ok(Tag {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(tags)
}
