//! gearlog library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Return { .. } => cli::commands::ret::handle(&cli.command, cfg),
        Commands::Update { .. } => cli::commands::update::handle(&cli.command, cfg),
        Commands::Overdue { .. } => cli::commands::overdue::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load();

    // apply DB override from the command line
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // every command except `init` needs an existing database file
    if !matches!(cli.command, Commands::Init) && !Path::new(&cfg.database).exists() {
        return Err(AppError::DatabaseMissing(cfg.database.clone()));
    }

    dispatch(&cli, &cfg)
}
