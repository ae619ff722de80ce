//! Application context — unified state passed to every command handler.
//!
//! `AppContext` owns the presentation context and the configuration store and
//! wires production adapters for the application services.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::DriverConfig;
use crate::infra::{TerraformExecutor, TokioCommandRunner, YamlConfigStore};
use crate::output::{OutputContext, TerminalReporter};

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Driver configuration store.
    pub config_store: YamlConfigStore,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: AppFlags) -> Self {
        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            config_store: YamlConfigStore::new(flags.config),
        }
    }

    /// Load and validate the driver configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read, parsed, or
    /// fails validation.
    pub fn load_config(&self) -> Result<DriverConfig> {
        self.config_store.load()
    }

    /// Terraform executor for the configured client.
    #[must_use]
    pub fn executor(&self, config: &DriverConfig) -> TerraformExecutor<TokioCommandRunner> {
        TerraformExecutor::new(config.client.clone(), TokioCommandRunner)
    }

    /// Progress reporter printing to the terminal.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }
}
