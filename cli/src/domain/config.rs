//! Domain types and validators for driver configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::version::{DEFAULT_VERSION_REQUIREMENT, VersionRequirement};

// ── Constants ────────────────────────────────────────────────────────────────

/// Default per-command timeout in seconds.
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 600;

// ── Config schema ────────────────────────────────────────────────────────────

/// Driver configuration stored in `.tfkit.yml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DriverConfig {
    /// Pathname of the Terraform client.
    pub client: PathBuf,
    /// Directory holding the root module; the working directory of every command.
    pub root_module_directory: PathBuf,
    /// Seconds a single Terraform command may run before it is killed.
    pub command_timeout: u64,
    /// Extra environment variables for Terraform commands.
    pub environment: BTreeMap<String, String>,
    /// `-backend-config` key/value pairs passed to `init`.
    pub backend_configurations: BTreeMap<String, String>,
    /// Whether Terraform output keeps its colours.
    pub color: bool,
    /// Whether Terraform holds the state lock.
    pub lock: bool,
    /// Seconds to wait for the state lock.
    pub lock_timeout: u64,
    /// Directory searched for provider plugins instead of the registry.
    pub plugin_directory: Option<PathBuf>,
    /// Whether `init` upgrades modules and plugins.
    pub upgrade_during_init: bool,
    /// Input variables (`-var`).
    pub variables: BTreeMap<String, String>,
    /// Variable definition files (`-var-file`).
    pub variable_files: Vec<PathBuf>,
    /// Fail when the client does not satisfy `version_requirement`.
    /// When `false` an unsupported client only produces a warning.
    pub verify_version: bool,
    /// Supported range of Terraform releases.
    pub version_requirement: String,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            client: PathBuf::from("terraform"),
            root_module_directory: PathBuf::from("."),
            command_timeout: DEFAULT_COMMAND_TIMEOUT_SECS,
            environment: BTreeMap::new(),
            backend_configurations: BTreeMap::new(),
            color: true,
            lock: true,
            lock_timeout: 0,
            plugin_directory: None,
            upgrade_during_init: false,
            variables: BTreeMap::new(),
            variable_files: Vec::new(),
            verify_version: true,
            version_requirement: DEFAULT_VERSION_REQUIREMENT.to_string(),
        }
    }
}

impl DriverConfig {
    #[must_use]
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout)
    }

    /// Configuration for the create action: `init` always upgrades, and the
    /// workspace name is fixed for the whole run.
    #[must_use]
    pub fn complete(&self, workspace_name: &str) -> CompleteConfig {
        CompleteConfig {
            driver: Self {
                upgrade_during_init: true,
                ..self.clone()
            },
            workspace_name: workspace_name.to_string(),
        }
    }
}

/// Driver configuration augmented for a single action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteConfig {
    pub driver: DriverConfig,
    pub workspace_name: String,
}

// ── Execution options ────────────────────────────────────────────────────────

/// Options applied to a single Terraform invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOptions {
    pub working_directory: PathBuf,
    pub timeout: Duration,
    /// Variables set for the child process.
    pub environment: BTreeMap<String, String>,
    /// Variables removed from the inherited environment.
    pub unset: Vec<String>,
}

impl ExecutionOptions {
    #[must_use]
    pub fn from_config(config: &DriverConfig) -> Self {
        Self {
            working_directory: config.root_module_directory.clone(),
            timeout: config.command_timeout(),
            environment: config.environment.clone(),
            unset: Vec::new(),
        }
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a loaded configuration.
///
/// # Errors
///
/// Returns an error for an empty client path, a zero command timeout, or an
/// unparsable version requirement.
pub fn validate_config(config: &DriverConfig) -> Result<(), ConfigError> {
    if config.client.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "client".to_string(),
            value: String::new(),
            hint: "Set the pathname of the Terraform client, e.g. 'terraform'.".to_string(),
        });
    }
    if config.command_timeout == 0 {
        return Err(ConfigError::InvalidValue {
            key: "command_timeout".to_string(),
            value: "0".to_string(),
            hint: "The timeout must be a positive number of seconds.".to_string(),
        });
    }
    if let Err(e) = VersionRequirement::parse(&config.version_requirement) {
        return Err(ConfigError::InvalidValue {
            key: "version_requirement".to_string(),
            value: config.version_requirement.clone(),
            hint: e.to_string(),
        });
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
