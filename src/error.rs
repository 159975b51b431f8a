// src/error.rs

use crate::models::EntryId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MlogError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Log entry {0} not found")]
    NotFound(EntryId),

    #[error("Edit aborted: {0}")]
    EditAborted(String),

    #[error("Database Error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Home directory not found")]
    HomeDirNotFound,
}

impl MlogError {
    /// Process exit code for this error, following sysexits(3).
    pub fn exit_code(&self) -> i32 {
        match self {
            MlogError::Validation(_) => 65,
            MlogError::NotFound(_) => 66,
            MlogError::EditAborted(_) => 75,
            MlogError::Config(_) | MlogError::HomeDirNotFound => 78,
            MlogError::Storage(_) | MlogError::Io(_) => 70,
        }
    }
}

pub type Result<T> = std::result::Result<T, MlogError>;
