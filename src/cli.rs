// src/cli.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "mlog - a tagged, append-only log for the command line",
    long_about = "mlog keeps short notes and log messages in a local SQLite database. Entries carry a timestamp and any number of tags, and can be listed by tag, keyword and date range."
)]
pub struct Cli {
    #[arg(
        short = 'd',
        long = "db-path",
        global = true,
        value_name = "DATABASE_PATH",
        help = "Database file to use instead of the default (~/.config/mlog/mlog.db or $MLOG_DB)"
    )]
    pub db_path: Option<PathBuf>,

    /// Defaults to `list` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Creates the database and prints its location.
    Init,

    /// Records a new log entry.
    /// The message is taken from the arguments, from --input-file, or from stdin.
    #[command(visible_alias = "a")]
    Add {
        /// Message words, joined with spaces.
        message: Vec<String>,

        #[arg(short, long, value_name = "INPUT_FILE", help = "File containing the text to log ('-' for stdin)")]
        input_file: Option<String>,

        #[arg(short, long, value_delimiter = ',', value_name = "TAGS", help = "Comma-separated tags for the new entry (repeat -t for more)")]
        tags: Vec<String>,

        #[arg(long, value_name = "DATE", help = "Backdate the entry (format: YYYY-MM-DDTHH:MM:SS)")]
        at: Option<String>,
    },

    /// Lists entries, oldest first.
    #[command(visible_aliases = ["l", "ls", "ll"])]
    List {
        #[arg(short, long, num_args = 1.., value_delimiter = ',', value_name = "TAGS", help = "Only entries carrying all of these tags (space or comma separated)")]
        tags: Vec<String>,

        #[arg(short, long, help = "Only entries whose message contains this text (case-insensitive)")]
        keyword: Option<String>,

        #[arg(short, long, value_name = "AFTER_DATE", help = "Only entries created at or after this date (YYYY-MM-DDTHH:MM:SS)")]
        after: Option<String>,

        #[arg(short, long, value_name = "BEFORE_DATE", help = "Only entries created at or before this date (YYYY-MM-DDTHH:MM:SS)")]
        before: Option<String>,
    },

    /// Edits an entry's message in $EDITOR, optionally replacing its tags.
    #[command(visible_alias = "e")]
    Edit {
        #[arg(help = "The numeric ID of the entry to edit")]
        id: i64,

        #[arg(short, long, num_args = 1.., value_delimiter = ',', value_name = "TAGS", help = "Replace the entry's tags with these (space or comma separated)")]
        tags: Option<Vec<String>>,

        #[arg(long, conflicts_with = "tags", help = "Remove every tag from the entry")]
        clear_tags: bool,

        #[arg(short, long, help = "Replacement message; skips the editor")]
        message: Option<String>,

        #[arg(short, long, conflicts_with = "message", value_name = "INPUT_FILE", help = "Read the replacement message from a file ('-' for stdin)")]
        input_file: Option<String>,
    },

    /// Deletes one or more entries.
    #[command(visible_aliases = ["del", "d"], verbatim_doc_comment)]
    Delete {
        /// IDs to delete: a single ID, a comma-separated list, or a range.
        /// Examples:
        ///   mlog del 5          (deletes #5)
        ///   mlog del 3,5,8      (deletes #3, #5, #8)
        ///   mlog del 3,7-9      (deletes #3, #7, #8, #9)
        #[arg(value_name = "ID_LIST")]
        ids: String,

        #[arg(short, long, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Lists every tag with the number of entries using it.
    #[command(visible_aliases = ["lt", "list-tags"])]
    Tags,
}
