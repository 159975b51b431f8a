#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// `mlog` with a clean environment, pointed at `db`.
pub fn mlog_cmd(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mlog").unwrap();
    cmd.env_remove("MLOG_DB");
    cmd.env_remove("MLOG_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd.arg("--db-path").arg(db);
    cmd
}

pub fn temp_db() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("mlog.db");
    (temp, db)
}
