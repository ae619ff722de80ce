//! Application service — validate action.
//!
//! Reads and verifies the client version, then runs `terraform validate` in
//! the dialect of that version.

use tracing::info;

use crate::application::ports::{CommandExecutor, ProgressReporter, VersionVerifier};
use crate::application::services::client_version::{read_client_version, verify_client_version};
use crate::domain::{DialectGate, DriverConfig, DriverError, ExecutionOptions, ValidateFactory};

/// Run the validate action and return the output of `terraform validate`.
///
/// # Errors
///
/// Returns [`DriverError::Version`] if the client is unsupported, or
/// [`DriverError::Command`] if any command fails.
pub async fn validate(
    executor: &impl CommandExecutor,
    verifier: &impl VersionVerifier,
    reporter: &impl ProgressReporter,
    config: &DriverConfig,
) -> Result<String, DriverError> {
    let options = ExecutionOptions::from_config(config);
    info!(directory = %options.working_directory.display(), "validating Terraform configuration");

    let version = read_client_version(executor, &options, reporter).await?;
    verify_client_version(verifier, &version, reporter)?;

    reporter.step("validating the Terraform configuration...");
    let command = ValidateFactory::new(version, DialectGate::default()).build(config);
    let stdout = executor.run(&command, &options).await?;
    reporter.success("validated the Terraform configuration");
    Ok(stdout)
}
