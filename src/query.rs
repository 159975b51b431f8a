// src/query.rs

use crate::error::Result;
use crate::models::LogEntry;
use crate::tags;
use chrono::NaiveDateTime;
use log::debug;
use rusqlite::{Connection, ToSql};
use std::collections::BTreeSet;

/// Search predicates. Every field that is set must match; an empty filter
/// matches every entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Entry must carry all of these tags. Matched after normalization.
    pub tags: Option<Vec<String>>,
    /// Case-insensitive substring of the message.
    pub keyword: Option<String>,
    /// Inclusive lower bound on `created_at`.
    pub after: Option<NaiveDateTime>,
    /// Inclusive upper bound on `created_at`.
    pub before: Option<NaiveDateTime>,
}

impl SearchFilters {
    pub fn with_tags<S: AsRef<str>>(mut self, tags: &[S]) -> Self {
        self.tags = Some(tags.iter().map(|t| t.as_ref().to_string()).collect());
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn after(mut self, ts: NaiveDateTime) -> Self {
        self.after = Some(ts);
        self
    }

    pub fn before(mut self, ts: NaiveDateTime) -> Self {
        self.before = Some(ts);
        self
    }
}

/// Runs a search, returning matches ordered by `created_at` then `id`.
pub fn search(conn: &Connection, filters: &SearchFilters) -> Result<Vec<LogEntry>> {
    let tag_names: BTreeSet<String> = match &filters.tags {
        Some(raw) => tags::normalize_tags(raw)?,
        None => BTreeSet::new(),
    };

    let mut query = String::from("SELECT id FROM entries WHERE 1 = 1 ");
    let mut params: Vec<Box<dyn ToSql>> = Vec::new();

    if !tag_names.is_empty() {
        let placeholders = vec!["?"; tag_names.len()].join(",");
        query.push_str(&format!(
            "AND id IN (
                SELECT et.entry_id
                FROM entry_tags et
                INNER JOIN tags t ON t.id = et.tag_id
                WHERE t.name IN ({})
                GROUP BY et.entry_id
                HAVING COUNT(DISTINCT t.id) = ?
            ) ",
            placeholders
        ));
        for name in &tag_names {
            params.push(Box::new(name.clone()));
        }
        params.push(Box::new(tag_names.len() as i64));
    }

    if let Some(after) = filters.after {
        query.push_str("AND created_at >= ? ");
        params.push(Box::new(after));
    }

    if let Some(before) = filters.before {
        query.push_str("AND created_at <= ? ");
        params.push(Box::new(before));
    }

    query.push_str("ORDER BY created_at ASC, id ASC");

    let mut stmt = conn.prepare(&query)?;
    let ids = stmt
        .query_map(
            rusqlite::params_from_iter(params.iter().map(|b| b.as_ref())),
            |row| row.get::<_, i64>(0),
        )?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let needle = filters.keyword.as_deref().map(str::to_lowercase);
    let mut entries = Vec::with_capacity(ids.len());
    for id in ids {
        let entry = crate::store::get(conn, id)?;
        if let Some(needle) = &needle {
            if !entry.message.to_lowercase().contains(needle.as_str()) {
                continue;
            }
        }
        entries.push(entry);
    }

    debug!(
        "event=search module=query tags={} keyword={} after={} before={} results={}",
        tag_names.len(),
        needle.is_some(),
        filters.after.is_some(),
        filters.before.is_some(),
        entries.len()
    );
    Ok(entries)
}
