//! rInternHours library root.
//! Exposes the session/hours accounting engine, the CLI parser and the
//! high-level `run()` used by the binary.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;

pub use crate::core::calculator::progress::ProgressOptions;
pub use crate::core::logic::Core;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => {
            cli::commands::config::handle(&cli.command, cfg, &config_path(cli))
        }
        Commands::Sessions { .. } => cli::commands::sessions::handle(&cli.command, cfg),
        Commands::Progress { .. } => cli::commands::progress::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Configuration file in effect: `--config` or the standard location.
pub(crate) fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // configuration is loaded once and handed to every command
    let path = config_path(&cli);
    let cfg = Config::load(Some(path.as_path()))?;

    dispatch(&cli, &cfg)
}
