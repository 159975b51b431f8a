// src/logbook.rs
//
// Each mutating method runs in exactly one IMMEDIATE transaction spanning the
// tag registry and the entry store. Returning early with `?` drops the
// transaction, which rolls it back.

use crate::db;
use crate::error::Result;
use crate::models::{EntryId, LogEntry, TagCount};
use crate::query::{self, SearchFilters};
use crate::{store, tags};
use chrono::NaiveDateTime;
use rusqlite::{Connection, TransactionBehavior};
use std::path::Path;

pub struct Logbook {
    conn: Connection,
}

impl Logbook {
    pub fn new(conn: Connection) -> Self {
        Logbook { conn }
    }

    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(db::open_db(path)?))
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(db::open_db_in_memory()?))
    }

    /// Records a new entry tagged with `tag_names`.
    pub fn add<S: AsRef<str>>(&mut self, message: &str, tag_names: &[S]) -> Result<LogEntry> {
        self.add_at(message, tag_names, crate::datetime::now())
    }

    /// Records a new entry with an explicit creation time.
    pub fn add_at<S: AsRef<str>>(
        &mut self,
        message: &str,
        tag_names: &[S],
        created_at: NaiveDateTime,
    ) -> Result<LogEntry> {
        store::validate_message(message)?;
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let resolved = tags::resolve(&tx, tag_names)?;
        let entry = store::create_at(&tx, message, &resolved, created_at)?;
        tx.commit()?;
        Ok(entry)
    }

    pub fn get(&self, id: EntryId) -> Result<LogEntry> {
        store::get(&self.conn, id)
    }

    /// Replaces the message and/or tag set of an entry. See [`store::update`].
    pub fn update(
        &mut self,
        id: EntryId,
        message: Option<&str>,
        tag_names: Option<&[String]>,
    ) -> Result<LogEntry> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let resolved = match tag_names {
            Some(names) => Some(tags::resolve(&tx, names)?),
            None => None,
        };
        let entry = store::update(&tx, id, message, resolved.as_ref())?;
        tx.commit()?;
        Ok(entry)
    }

    pub fn delete(&mut self, id: EntryId) -> Result<LogEntry> {
        self.delete_many(&[id]).map(|mut deleted| deleted.remove(0))
    }

    /// Deletes every listed entry or none of them.
    pub fn delete_many(&mut self, ids: &[EntryId]) -> Result<Vec<LogEntry>> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let mut deleted = Vec::with_capacity(ids.len());
        for &id in ids {
            deleted.push(store::delete(&tx, id)?);
        }
        tx.commit()?;
        Ok(deleted)
    }

    pub fn search(&self, filters: &SearchFilters) -> Result<Vec<LogEntry>> {
        query::search(&self.conn, filters)
    }

    pub fn tags(&self) -> Result<Vec<TagCount>> {
        tags::all_with_counts(&self.conn)
    }
}
