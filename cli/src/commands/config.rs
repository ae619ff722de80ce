//! `tfkit config` — show the effective driver configuration.

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Print the configuration file location
    Path,
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or serialized.
pub fn run(app: &AppContext, cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let config = app.load_config()?;
            let yaml = serde_yaml::to_string(&config).context("cannot serialize config")?;
            app.output
                .kv("file", &app.config_store.path().display().to_string());
            println!("{yaml}");
        }
        ConfigCommand::Path => println!("{}", app.config_store.path().display()),
    }
    Ok(())
}
