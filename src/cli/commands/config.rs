use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{migrate_config, missing_keys};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
    } = cmd
    {
        if *print_config {
            info(format!("Current configuration ({}):", path.display()));
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            let missing = missing_keys(path)?;
            if missing.is_empty() {
                success("Configuration file is complete");
            } else {
                warning(format!("Missing keys: {}", missing.join(", ")));
            }
        }

        if *migrate {
            let added = migrate_config(path)?;
            if added.is_empty() {
                info("No migration needed");
            } else {
                success(format!("Added keys: {}", added.join(", ")));
            }
        }

        // validate whatever is on disk now
        Config::load(Some(path))?.policy()?;
    }

    Ok(())
}
