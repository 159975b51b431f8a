//! End-to-end tests for the mlog binary.

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;

mod common;
use common::{mlog_cmd, temp_db};

#[test]
fn init_creates_database_file() {
    let (_temp, db) = temp_db();
    mlog_cmd(&db)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database ready"));
    assert!(db.exists());
}

#[test]
fn add_then_list_shows_entry_with_tags() {
    let (_temp, db) = temp_db();
    mlog_cmd(&db)
        .args(["add", "-t", "Errand,home", "buy", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Log #1 recorded"));

    mlog_cmd(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("buy milk"))
        .stdout(predicate::str::contains("Tags: errand, home"));
}

#[test]
fn no_subcommand_lists_entries() {
    let (_temp, db) = temp_db();
    mlog_cmd(&db).args(["add", "hello"]).assert().success();
    mlog_cmd(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("hello"));
}

#[test]
fn add_reads_stdin_and_input_file() {
    let (temp, db) = temp_db();
    mlog_cmd(&db)
        .arg("add")
        .write_stdin("from stdin\n")
        .assert()
        .success();

    let note = temp.path().join("note.txt");
    fs::write(&note, "from a file\n").unwrap();
    mlog_cmd(&db)
        .args(["add", "-i"])
        .arg(&note)
        .assert()
        .success();

    mlog_cmd(&db)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("from stdin"))
        .stdout(predicate::str::contains("from a file"));
}

#[test]
fn empty_message_is_rejected() {
    let (_temp, db) = temp_db();
    mlog_cmd(&db)
        .arg("add")
        .write_stdin("   \n")
        .assert()
        .code(65)
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn list_filters_by_keyword_tags_and_dates() {
    let (_temp, db) = temp_db();
    mlog_cmd(&db)
        .args(["add", "--at", "2024-01-10T09:00:00", "-t", "work", "Deploy API"])
        .assert()
        .success();
    mlog_cmd(&db)
        .args(["add", "--at", "2024-02-10T09:00:00", "-t", "work,ops", "Pager duty"])
        .assert()
        .success();

    mlog_cmd(&db)
        .args(["list", "-t", "WORK", "-k", "pager"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pager duty"))
        .stdout(predicate::str::contains("Deploy API").not());

    mlog_cmd(&db)
        .args(["list", "-b", "2024-01-31T00:00:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deploy API"))
        .stdout(predicate::str::contains("Pager duty").not());

    mlog_cmd(&db)
        .args(["list", "-a", "2030-01-01T00:00:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No logs found."));
}

#[test]
fn malformed_date_is_rejected() {
    let (_temp, db) = temp_db();
    mlog_cmd(&db)
        .args(["list", "--after", "last tuesday"])
        .assert()
        .code(65)
        .stderr(predicate::str::contains("YYYY-MM-DDTHH:MM:SS"));
}

#[test]
fn tags_lists_counts_and_delete_purges() {
    let (_temp, db) = temp_db();
    mlog_cmd(&db).args(["add", "-t", "errand", "buy milk"]).assert().success();
    mlog_cmd(&db)
        .args(["add", "-t", "Family,errand", "call mom"])
        .assert()
        .success();

    mlog_cmd(&db)
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("     2: errand"))
        .stdout(predicate::str::contains("     1: family"));

    mlog_cmd(&db)
        .args(["delete", "1-2"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted 2 log(s)"));

    mlog_cmd(&db)
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags found."));
}

#[test]
fn declined_delete_keeps_entry() {
    let (_temp, db) = temp_db();
    mlog_cmd(&db).args(["add", "keep me"]).assert().success();
    mlog_cmd(&db)
        .args(["del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));
    mlog_cmd(&db)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("keep me"));
}

#[test]
fn delete_unknown_id_fails_with_not_found() {
    let (_temp, db) = temp_db();
    mlog_cmd(&db)
        .args(["delete", "--yes", "42"])
        .assert()
        .code(66)
        .stderr(predicate::str::contains("Log entry 42 not found"));
}

#[test]
fn edit_with_inline_message_and_clear_tags() {
    let (_temp, db) = temp_db();
    mlog_cmd(&db).args(["add", "-t", "solo", "draft"]).assert().success();

    mlog_cmd(&db)
        .args(["edit", "1", "-m", "final text", "--clear-tags"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Log #1 updated"));

    mlog_cmd(&db)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("final text"))
        .stdout(predicate::str::contains("Tags:").not());
    mlog_cmd(&db)
        .arg("tags")
        .assert()
        .stdout(predicate::str::contains("No tags found."));
}

#[cfg(unix)]
#[test]
fn failing_editor_aborts_edit() {
    let (_temp, db) = temp_db();
    mlog_cmd(&db).args(["add", "original"]).assert().success();

    mlog_cmd(&db)
        .env("EDITOR", "false")
        .args(["edit", "1", "-t", "new"])
        .assert()
        .code(75)
        .stderr(predicate::str::contains("Edit aborted"));

    mlog_cmd(&db)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("original"))
        .stdout(predicate::str::contains("Tags:").not());
}

#[cfg(unix)]
#[test]
fn untouched_editor_buffer_still_applies_new_tags() {
    let (_temp, db) = temp_db();
    mlog_cmd(&db).args(["add", "-t", "old", "stay"]).assert().success();

    mlog_cmd(&db)
        .env("EDITOR", "true")
        .args(["e", "1", "-t", "New"])
        .assert()
        .success();

    mlog_cmd(&db)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("stay"))
        .stdout(predicate::str::contains("Tags: new"));
    mlog_cmd(&db)
        .arg("tags")
        .assert()
        .stdout(predicate::str::contains("old").not());
}

#[test]
fn db_path_can_come_from_environment() {
    let (_temp, db) = temp_db();
    let mut cmd = assert_cmd::Command::cargo_bin("mlog").unwrap();
    cmd.env("MLOG_DB", &db)
        .args(["add", "via env"])
        .assert()
        .success();
    assert!(db.exists());
}

#[test]
fn list_accepts_space_separated_tags() {
    let (_temp, db) = temp_db();
    mlog_cmd(&db)
        .args(["add", "-t", "work,ops", "deploy", "api"])
        .assert()
        .success();
    mlog_cmd(&db)
        .args(["add", "-t", "work", "-t", "home", "plan", "week"])
        .assert()
        .success();

    mlog_cmd(&db)
        .args(["list", "-t", "work", "ops"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deploy api"))
        .stdout(predicate::str::contains("plan week").not());
}

#[test]
fn oversized_delete_range_is_rejected() {
    let (_temp, db) = temp_db();
    mlog_cmd(&db)
        .args(["delete", "-y", "1-9223372036854775807"])
        .assert()
        .code(65);
}
