// src/commands.rs

use crate::config::Config;
use crate::datetime::{format_timestamp, parse_timestamp};
use crate::edit::{EditCoordinator, ExternalEditor, ReplacementText};
use crate::error::{MlogError, Result};
use crate::logbook::Logbook;
use crate::models::{EntryId, LogEntry};
use crate::query::SearchFilters;
use std::collections::BTreeSet;
use std::io::{self, Read, Write};

/// Largest number of IDs a single `a-b` range may expand to.
const MAX_RANGE_SPAN: i64 = 10_000;

/// Handles 'init'
pub fn handle_init(config: &Config) -> Result<()> {
    Logbook::open(&config.db_path)?;
    println!("✓ Database ready at: {}", config.db_path.display());
    Ok(())
}

/// Handles 'add'
pub fn handle_add(
    config: &Config,
    message: Vec<String>,
    input_file: Option<String>,
    tags: Vec<String>,
    at: Option<String>,
) -> Result<()> {
    let created_at = at.as_deref().map(parse_timestamp).transpose()?;

    let content = match input_file {
        Some(path) => read_input(&path)?,
        None if !message.is_empty() => message.join(" "),
        None => read_stdin()?,
    };

    let mut book = Logbook::open(&config.db_path)?;
    let entry = match created_at {
        Some(ts) => book.add_at(&content, tags.as_slice(), ts)?,
        None => book.add(&content, tags.as_slice())?,
    };

    println!("✓ Log #{} recorded.", entry.id);
    Ok(())
}

/// Handles 'list'
pub fn handle_list(
    config: &Config,
    tags: Vec<String>,
    keyword: Option<String>,
    after: Option<String>,
    before: Option<String>,
) -> Result<()> {
    // Dates are validated before the database is touched.
    let filters = SearchFilters {
        tags: if tags.is_empty() { None } else { Some(tags) },
        keyword,
        after: after.as_deref().map(parse_timestamp).transpose()?,
        before: before.as_deref().map(parse_timestamp).transpose()?,
    };

    let book = Logbook::open(&config.db_path)?;
    let entries = book.search(&filters)?;

    if entries.is_empty() {
        println!("No logs found.");
        return Ok(());
    }

    for entry in &entries {
        print_entry(entry);
    }
    Ok(())
}

/// Handles 'edit'
pub fn handle_edit(
    config: &Config,
    id: EntryId,
    tags: Option<Vec<String>>,
    clear_tags: bool,
    message: Option<String>,
    input_file: Option<String>,
) -> Result<()> {
    let new_tags = if clear_tags { Some(Vec::new()) } else { tags };
    let replacement = match (message, input_file) {
        (Some(text), _) => Some(text),
        (None, Some(path)) => Some(read_input(&path)?),
        (None, None) => None,
    };

    let mut book = Logbook::open(&config.db_path)?;
    let entry = match replacement {
        Some(text) => {
            EditCoordinator::new(&mut book, ReplacementText(text)).run(id, new_tags.as_deref())?
        }
        None => EditCoordinator::new(&mut book, ExternalEditor::new(config.editor.clone()))
            .run(id, new_tags.as_deref())?,
    };

    println!("✓ Log #{} updated.", entry.id);
    Ok(())
}

/// Handles 'delete'
pub fn handle_delete(config: &Config, ids_str: &str, yes: bool) -> Result<()> {
    let ids = parse_id_range(ids_str)?;
    if ids.is_empty() {
        return Err(MlogError::Validation("No log IDs given.".to_string()));
    }

    let mut book = Logbook::open(&config.db_path)?;

    if !yes {
        println!("You are about to permanently delete the following log IDs: {:?}", ids);
        print!("Confirm deletion? (y/N): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let deleted = book.delete_many(&ids)?;
    println!("✓ Successfully deleted {} log(s).", deleted.len());
    Ok(())
}

/// Handles 'tags'
pub fn handle_tags(config: &Config) -> Result<()> {
    let book = Logbook::open(&config.db_path)?;
    let counts = book.tags()?;
    if counts.is_empty() {
        println!("No tags found.");
        return Ok(());
    }
    for tag in counts {
        println!("{:6}: {}", tag.count, tag.name);
    }
    Ok(())
}

fn print_entry(entry: &LogEntry) {
    let tags_display = if entry.tags.is_empty() {
        String::new()
    } else {
        format!(" | Tags: {}", entry.tag_names().join(", "))
    };
    println!(
        "[{}] {}{}",
        entry.id,
        format_timestamp(&entry.created_at),
        tags_display
    );
    println!("{}", entry.message);
    println!("{}", "─".repeat(40));
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        return read_stdin();
    }
    std::fs::read_to_string(path)
        .map_err(|e| MlogError::Config(format!("Cannot read input file '{}': {}", path, e)))
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Parses an ID list such as "1,3,5-7" into sorted, unique IDs.
pub fn parse_id_range(s: &str) -> Result<Vec<EntryId>> {
    let mut ids = BTreeSet::new();
    for part in s.split(',') {
        let part = part.trim();
        if let Some((start_str, end_str)) = part.split_once('-') {
            let start = parse_id(start_str.trim())?;
            let end = parse_id(end_str.trim())?;
            if start > end {
                return Err(MlogError::Validation(format!(
                    "Start of range {} cannot be greater than end {}",
                    start, end
                )));
            }
            if end - start >= MAX_RANGE_SPAN {
                return Err(MlogError::Validation(format!(
                    "Range {}-{} is too large (at most {} IDs per range)",
                    start, end, MAX_RANGE_SPAN
                )));
            }
            ids.extend(start..=end);
        } else if !part.is_empty() {
            ids.insert(parse_id(part)?);
        }
    }
    Ok(ids.into_iter().collect())
}

fn parse_id(s: &str) -> Result<EntryId> {
    s.parse()
        .map_err(|_| MlogError::Validation(format!("Invalid ID: '{}'", s)))
}
