// src/main.rs

use clap::Parser;
use mlog::cli::{Cli, Commands};
use mlog::commands;
use mlog::config::{Config, LOG_ENV_VAR};
use mlog::error::Result;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV_VAR, "warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.db_path)?;
    log::debug!("event=config module=main db_path={}", config.db_path.display());

    match cli.command {
        Some(Commands::Init) => commands::handle_init(&config),
        Some(Commands::Add {
            message,
            input_file,
            tags,
            at,
        }) => commands::handle_add(&config, message, input_file, tags, at),
        Some(Commands::List {
            tags,
            keyword,
            after,
            before,
        }) => commands::handle_list(&config, tags, keyword, after, before),
        Some(Commands::Edit {
            id,
            tags,
            clear_tags,
            message,
            input_file,
        }) => commands::handle_edit(&config, id, tags, clear_tags, message, input_file),
        Some(Commands::Delete { ids, yes }) => commands::handle_delete(&config, &ids, yes),
        Some(Commands::Tags) => commands::handle_tags(&config),
        None => commands::handle_list(&config, Vec::new(), None, None, None),
    }
}
