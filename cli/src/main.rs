//! tfkit - Terraform working directory and workspace setup for test harnesses

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tfkit_cli::cli::Cli;
use tfkit_cli::output::OutputContext;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let output = OutputContext::new(cli.no_color, cli.quiet);
    if let Err(e) = cli.run().await {
        output.error(&format!("Error: {e:#}"));
        std::process::exit(1);
    }
}
