//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;
use std::process::Output;

use anyhow::Result;

use crate::domain::{
    ClientVersion, Command, CommandError, DriverConfig, ExecutionOptions, VersionError,
};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// This trait is NOT tied to Terraform — it can run any external command.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program in `options.working_directory` and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds
    /// `options.timeout`. On timeout, the child process must be killed
    /// (not left orphaned).
    async fn run(&self, program: &str, args: &[String], options: &ExecutionOptions)
    -> Result<Output>;
}

// ── Terraform Executor Port ───────────────────────────────────────────────────

/// Runs Terraform command descriptors.
#[allow(async_fn_in_trait)]
pub trait CommandExecutor {
    /// Run `command` and return its standard output.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::WorkspaceExists`] when `workspace new` finds an
    /// existing workspace; every other error is fatal to the caller.
    async fn run(
        &self,
        command: &Command,
        options: &ExecutionOptions,
    ) -> std::result::Result<String, CommandError>;
}

// ── Version Verification Port ─────────────────────────────────────────────────

/// Result of a successful version check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// The client satisfies the requirement.
    Satisfied,
    /// The client does not satisfy the requirement but verification is
    /// disabled; `reason` describes the mismatch.
    Bypassed { reason: String },
}

/// Checks the client version against the supported range.
pub trait VersionVerifier {
    /// # Errors
    ///
    /// Returns [`VersionError::Incompatible`] when the client is unsupported
    /// and verification is enforced.
    fn verify(&self, version: &ClientVersion) -> std::result::Result<Verification, VersionError>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts loading driver configuration.
pub trait ConfigStore {
    /// Load the configuration, returning defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<DriverConfig>;
    /// Location of the configuration file.
    fn path(&self) -> PathBuf;
}
