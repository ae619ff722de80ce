//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;

/// Prepare Terraform root modules and workspaces for infrastructure tests
#[derive(Parser, Debug)]
#[command(
    name = "tfkit",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Configuration file (defaults to $TFKIT_CONFIG, then ./.tfkit.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (also honoured via `NO_COLOR`)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log executed commands and diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the root module and create or select the test workspace
    Create(commands::create::CreateArgs),

    /// Validate the root module
    Validate,

    /// Inspect configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            config,
            quiet,
            no_color,
            command,
            ..
        } = self;
        let app = AppContext::new(AppFlags {
            no_color,
            quiet,
            config,
        });
        match command {
            Command::Create(args) => commands::create::run(&app, &args).await,
            Command::Validate => commands::validate::run(&app).await,
            Command::Config(cmd) => commands::config::run(&app, &cmd),
            Command::Version => {
                commands::version::run();
                Ok(())
            }
        }
    }
}
