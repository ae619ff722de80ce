//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Version errors ────────────────────────────────────────────────────────────

/// Errors related to the Terraform client version.
#[derive(Debug, Error)]
pub enum VersionError {
    #[error(
        "Terraform {version} does not satisfy the version requirement '{requirement}'.\n\nInstall a supported release or set 'verify_version: false'."
    )]
    Incompatible {
        version: String,
        requirement: String,
    },

    #[error("Invalid version requirement '{requirement}': {reason}")]
    InvalidRequirement { requirement: String, reason: String },
}

// ── Command errors ────────────────────────────────────────────────────────────

/// Outcome of a Terraform invocation that did not succeed.
#[derive(Debug, Error)]
pub enum CommandError {
    /// `workspace new` found an existing workspace of the same name.
    #[error("Terraform workspace '{workspace}' already exists: {message}")]
    WorkspaceExists { workspace: String, message: String },

    #[error("'terraform {command}' failed{}:\n{stderr}", exit_code_suffix(*code))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("'terraform {command}' could not be run: {message}")]
    Launch { command: String, message: String },
}

impl CommandError {
    /// Whether the orchestrator has a designed recovery for this failure.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::WorkspaceExists { .. })
    }
}

fn exit_code_suffix(code: Option<i32>) -> String {
    code.map_or_else(String::new, |c| format!(" with exit code {c}"))
}

// ── Driver errors ─────────────────────────────────────────────────────────────

/// Failure of a driver action (create, validate).
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to driver configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}\n\n{hint}")]
    InvalidValue {
        key: String,
        value: String,
        hint: String,
    },

    #[error("Invalid workspace name '{0}': must match ^[A-Za-z0-9_.-]{{1,90}}$")]
    InvalidWorkspaceName(String),
}
