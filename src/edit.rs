// src/edit.rs

//! Edit coordinator: read an entry, hand its message to an editor, commit.
//!
//! The flow is `Loaded -> Edited -> Committed`, or `Loaded -> Aborted` when
//! the editor fails. Nothing is written until the editor has returned, and the
//! commit is a single [`Logbook::update`], so an aborted or rejected edit
//! leaves the stored entry untouched.

use crate::error::{MlogError, Result};
use crate::logbook::Logbook;
use crate::models::{EntryId, LogEntry};
use log::{debug, warn};
use std::io::Write;
use std::process::Command;

/// Something that turns a seed text into an edited text.
pub trait Editor {
    /// Returns the edited buffer, or `MlogError::EditAborted` when no usable
    /// result was produced.
    fn edit(&mut self, seed: &str) -> Result<String>;
}

/// Runs an editor program on a temporary file seeded with the text.
pub struct ExternalEditor {
    command: String,
}

impl ExternalEditor {
    pub fn new(command: impl Into<String>) -> Self {
        ExternalEditor {
            command: command.into(),
        }
    }

    /// Splits the command into program and leading arguments.
    fn parse_command(&self) -> (String, Vec<String>) {
        let mut parts = self.command.split_whitespace().map(str::to_string);
        let program = parts.next().unwrap_or_else(|| "vi".to_string());
        (program, parts.collect())
    }
}

impl Editor for ExternalEditor {
    fn edit(&mut self, seed: &str) -> Result<String> {
        let mut temp_file = tempfile::Builder::new()
            .prefix("mlog-")
            .suffix(".txt")
            .tempfile()
            .map_err(|e| MlogError::EditAborted(format!("Cannot create temp file: {}", e)))?;
        temp_file
            .write_all(seed.as_bytes())
            .and_then(|_| temp_file.flush())
            .map_err(|e| MlogError::EditAborted(format!("Cannot write temp file: {}", e)))?;

        let (program, args) = self.parse_command();
        let status = Command::new(&program)
            .args(&args)
            .arg(temp_file.path())
            .status()
            .map_err(|e| {
                MlogError::EditAborted(format!("Failed to launch editor '{}': {}", program, e))
            })?;

        if !status.success() {
            return Err(MlogError::EditAborted(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        // Read by path: some editors replace the file instead of writing in place.
        std::fs::read_to_string(temp_file.path())
            .map_err(|e| MlogError::EditAborted(format!("Cannot read edited text: {}", e)))
    }
}

/// Returns a fixed text, ignoring the seed. Used for `--message` and
/// `--input-file` edits.
pub struct ReplacementText(pub String);

impl Editor for ReplacementText {
    fn edit(&mut self, _seed: &str) -> Result<String> {
        Ok(self.0.clone())
    }
}

pub struct EditCoordinator<'a, E: Editor> {
    logbook: &'a mut Logbook,
    editor: E,
}

impl<'a, E: Editor> EditCoordinator<'a, E> {
    pub fn new(logbook: &'a mut Logbook, editor: E) -> Self {
        EditCoordinator { logbook, editor }
    }

    /// Edits the message of entry `id`. When `new_tags` is given the tag set is
    /// replaced as well; an empty list detaches every tag.
    pub fn run(&mut self, id: EntryId, new_tags: Option<&[String]>) -> Result<LogEntry> {
        let current = self.logbook.get(id)?;
        debug!("event=edit module=edit phase=loaded id={}", id);

        let edited = match self.editor.edit(&current.message) {
            Ok(text) => text,
            Err(err) => {
                warn!("event=edit module=edit phase=aborted id={} error={}", id, err);
                return Err(match err {
                    MlogError::EditAborted(_) => err,
                    other => MlogError::EditAborted(other.to_string()),
                });
            }
        };
        debug!("event=edit module=edit phase=edited id={}", id);

        let entry = self.logbook.update(id, Some(edited.as_str()), new_tags)?;
        debug!("event=edit module=edit phase=committed id={}", id);
        Ok(entry)
    }
}
