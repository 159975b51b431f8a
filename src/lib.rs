// src/lib.rs

//! mlog - a personal, tagged, append-only log.
//!
//! Entries live in SQLite. [`logbook::Logbook`] is the entry point: it wraps
//! every mutation of entries and tags in a single transaction, so a tag never
//! outlives the last entry that referenced it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod datetime;
pub mod db;
pub mod edit;
pub mod error;
pub mod logbook;
pub mod models;
pub mod query;
pub mod store;
pub mod tags;

pub use edit::{EditCoordinator, Editor, ExternalEditor};
pub use error::{MlogError, Result};
pub use logbook::Logbook;
pub use models::{EntryId, LogEntry, Tag, TagCount};
pub use query::SearchFilters;
