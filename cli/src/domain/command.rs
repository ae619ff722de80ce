//! Terraform command descriptors and the version-gated factories that build them.
//!
//! A descriptor only describes an invocation; rendering to process arguments
//! is pure and running it is the executor's job.

use std::fmt;
use std::path::PathBuf;

use crate::domain::config::{CompleteConfig, DriverConfig};
use crate::domain::version::{ClientVersion, VersionRequirement};

// ── Dialect gating ───────────────────────────────────────────────────────────

/// Argument dialect of a gated command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Terraform before 0.15.0.
    Legacy,
    /// Terraform 0.15.0 and later.
    Current,
}

/// Selects a [`Dialect`] from a client version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectGate {
    legacy: VersionRequirement,
}

impl DialectGate {
    /// Gate whose legacy range is `legacy`.
    #[must_use]
    pub fn new(legacy: VersionRequirement) -> Self {
        Self { legacy }
    }

    #[must_use]
    pub fn select(&self, version: &ClientVersion) -> Dialect {
        if self.legacy.satisfied_by(version) {
            Dialect::Legacy
        } else {
            Dialect::Current
        }
    }
}

impl Default for DialectGate {
    fn default() -> Self {
        Self::new(VersionRequirement::legacy_dialect())
    }
}

// ── Descriptors ──────────────────────────────────────────────────────────────

/// Arguments of `terraform init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Init {
    pub dialect: Dialect,
    pub backend_configurations: Vec<(String, String)>,
    pub color: bool,
    pub lock: bool,
    pub lock_timeout: u64,
    pub plugin_directory: Option<PathBuf>,
    pub upgrade: bool,
}

/// Arguments of `terraform validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validate {
    pub dialect: Dialect,
    pub color: bool,
    pub variables: Vec<(String, String)>,
    pub variable_files: Vec<PathBuf>,
}

/// One Terraform invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Version,
    Init(Init),
    Validate(Validate),
    WorkspaceNew { name: String },
    WorkspaceSelect { name: String },
}

impl Command {
    /// Process arguments following the client pathname.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::Version => vec!["version".to_string()],
            Self::Init(init) => init.args(),
            Self::Validate(validate) => validate.args(),
            Self::WorkspaceNew { name } => {
                vec!["workspace".to_string(), "new".to_string(), name.clone()]
            }
            Self::WorkspaceSelect { name } => {
                vec!["workspace".to_string(), "select".to_string(), name.clone()]
            }
        }
    }

    /// Workspace targeted by `workspace new`, if this is one.
    #[must_use]
    pub fn new_workspace(&self) -> Option<&str> {
        match self {
            Self::WorkspaceNew { name } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args().join(" "))
    }
}

impl Init {
    fn args(&self) -> Vec<String> {
        let mut args = vec!["init".to_string(), "-backend=true".to_string()];
        args.extend(
            self.backend_configurations
                .iter()
                .map(|(k, v)| format!("-backend-config={k}={v}")),
        );
        if !self.color {
            args.push("-no-color".to_string());
        }
        args.push("-force-copy".to_string());
        args.push("-get=true".to_string());
        if self.dialect == Dialect::Legacy {
            args.push("-get-plugins=true".to_string());
        }
        args.push("-input=false".to_string());
        args.push(format!("-lock={}", self.lock));
        args.push(format!("-lock-timeout={}s", self.lock_timeout));
        if let Some(dir) = &self.plugin_directory {
            args.push(format!("-plugin-dir={}", dir.display()));
        }
        if self.upgrade {
            args.push("-upgrade".to_string());
        }
        if self.dialect == Dialect::Legacy {
            args.push("-verify-plugins=true".to_string());
        }
        args
    }
}

impl Validate {
    fn args(&self) -> Vec<String> {
        let mut args = vec!["validate".to_string()];
        if !self.color {
            args.push("-no-color".to_string());
        }
        // 0.15 removed input variables from validate.
        if self.dialect == Dialect::Legacy {
            args.extend(self.variables.iter().map(|(k, v)| format!("-var={k}={v}")));
            args.extend(
                self.variable_files
                    .iter()
                    .map(|f| format!("-var-file={}", f.display())),
            );
        }
        args
    }
}

fn pairs(map: &std::collections::BTreeMap<String, String>) -> Vec<(String, String)> {
    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

// ── Factories ────────────────────────────────────────────────────────────────

/// Builds `init` descriptors for a client version.
#[derive(Debug, Clone)]
pub struct InitFactory {
    version: ClientVersion,
    gate: DialectGate,
}

impl InitFactory {
    #[must_use]
    pub fn new(version: ClientVersion, gate: DialectGate) -> Self {
        Self { version, gate }
    }

    #[must_use]
    pub fn build(&self, config: &CompleteConfig) -> Command {
        let driver = &config.driver;
        Command::Init(Init {
            dialect: self.gate.select(&self.version),
            backend_configurations: pairs(&driver.backend_configurations),
            color: driver.color,
            lock: driver.lock,
            lock_timeout: driver.lock_timeout,
            plugin_directory: driver.plugin_directory.clone(),
            upgrade: driver.upgrade_during_init,
        })
    }
}

/// Builds `validate` descriptors for a client version.
#[derive(Debug, Clone)]
pub struct ValidateFactory {
    version: ClientVersion,
    gate: DialectGate,
}

impl ValidateFactory {
    #[must_use]
    pub fn new(version: ClientVersion, gate: DialectGate) -> Self {
        Self { version, gate }
    }

    #[must_use]
    pub fn build(&self, config: &DriverConfig) -> Command {
        Command::Validate(Validate {
            dialect: self.gate.select(&self.version),
            color: config.color,
            variables: pairs(&config.variables),
            variable_files: config.variable_files.clone(),
        })
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
