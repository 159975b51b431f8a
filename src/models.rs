// src/models.rs

use chrono::NaiveDateTime;

pub type EntryId = i64;
pub type TagId = i64;

/// A normalized label. Ordering is by name first, so sets of tags iterate
/// alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag {
    pub name: String,
    pub id: TagId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: EntryId,
    pub message: String,
    pub created_at: NaiveDateTime,
    /// Sorted by name.
    pub tags: Vec<Tag>,
}

impl LogEntry {
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }
}

/// A row of the tags listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub name: String,
    pub count: u32,
}
