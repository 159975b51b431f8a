// src/config.rs

use crate::db;
use crate::error::Result;
use std::path::PathBuf;

pub const DB_ENV_VAR: &str = "MLOG_DB";
pub const LOG_ENV_VAR: &str = "MLOG_LOG";

/// Settings resolved once per invocation and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub editor: String,
}

impl Config {
    /// Resolves the database path (flag, then `MLOG_DB`, then the default
    /// under the home directory) and the editor command.
    pub fn resolve(db_path_flag: Option<PathBuf>) -> Result<Self> {
        let db_path = match db_path_flag {
            Some(path) => path,
            None => match std::env::var_os(DB_ENV_VAR) {
                Some(path) if !path.is_empty() => PathBuf::from(path),
                _ => db::default_db_path()?,
            },
        };

        Ok(Config {
            db_path,
            editor: detect_editor(),
        })
    }
}

/// EDITOR, then VISUAL, then vi.
pub fn detect_editor() -> String {
    editor_from(std::env::var("EDITOR").ok(), std::env::var("VISUAL").ok())
}

fn editor_from(editor: Option<String>, visual: Option<String>) -> String {
    let non_blank = |cmd: &String| !cmd.trim().is_empty();
    editor
        .filter(non_blank)
        .or_else(|| visual.filter(non_blank))
        .unwrap_or_else(|| "vi".to_string())
}
