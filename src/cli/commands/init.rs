use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: create the configuration directory and a
/// default configuration file. An existing file is left untouched.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = crate::config_path(cli);

    info(format!("Config file: {}", path.display()));

    if cli.test {
        info("Test mode: configuration file not written");
        return Ok(());
    }

    if path.exists() {
        info("Configuration already present, nothing to do");
        return Ok(());
    }

    Config::default().save(&path)?;
    success(format!("Configuration written to {}", path.display()));
    Ok(())
}
