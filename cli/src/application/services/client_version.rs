//! Application service — read and verify the Terraform client version.
//!
//! Shared by the create and validate actions. Imports only from
//! `crate::domain` and `crate::application::ports`.

use tracing::debug;

use crate::application::ports::{
    CommandExecutor, ProgressReporter, Verification, VersionVerifier,
};
use crate::domain::{
    ClientVersion, Command, CommandError, DriverConfig, ExecutionOptions, VersionError,
    VersionRequirement, parse_client_version,
};

/// Verifies the client against the configured supported range.
///
/// When `enforce` is `false` an unsupported client is reported as
/// [`Verification::Bypassed`] instead of failing.
#[derive(Debug, Clone)]
pub struct RequirementVerifier {
    requirement: VersionRequirement,
    enforce: bool,
}

impl RequirementVerifier {
    #[must_use]
    pub fn new(requirement: VersionRequirement, enforce: bool) -> Self {
        Self {
            requirement,
            enforce,
        }
    }

    /// Build from `version_requirement` and `verify_version`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured requirement does not parse.
    pub fn from_config(config: &DriverConfig) -> Result<Self, VersionError> {
        Ok(Self::new(
            VersionRequirement::parse(&config.version_requirement)?,
            config.verify_version,
        ))
    }

    #[must_use]
    pub fn requirement(&self) -> &VersionRequirement {
        &self.requirement
    }
}

impl VersionVerifier for RequirementVerifier {
    fn verify(&self, version: &ClientVersion) -> Result<Verification, VersionError> {
        if self.requirement.satisfied_by(version) {
            return Ok(Verification::Satisfied);
        }
        let err = VersionError::Incompatible {
            version: version.to_string(),
            requirement: self.requirement.to_string(),
        };
        if self.enforce {
            return Err(err);
        }
        Ok(Verification::Bypassed {
            reason: format!(
                "Terraform {version} does not satisfy '{}'; continuing because version verification is disabled",
                self.requirement
            ),
        })
    }
}

/// Run `terraform version` and parse the banner.
///
/// An unparsable banner is not an error: it yields [`ClientVersion::Unknown`],
/// which gates to the legacy command dialect.
///
/// # Errors
///
/// Returns the executor's error if `terraform version` fails.
pub async fn read_client_version(
    executor: &impl CommandExecutor,
    options: &ExecutionOptions,
    reporter: &impl ProgressReporter,
) -> Result<ClientVersion, CommandError> {
    reporter.step("reading the Terraform client version...");
    let stdout = executor.run(&Command::Version, options).await?;
    let version = parse_client_version(&stdout);
    debug!(%version, "parsed client version");
    if version.is_known() {
        reporter.success(&format!("Terraform client version is {version}"));
    } else {
        reporter.warn(
            "could not determine the Terraform client version; treating it as 0.0.0 (pre-0.15.0 commands)",
        );
    }
    Ok(version)
}

/// Check `version` with `verifier`, narrating the outcome.
///
/// # Errors
///
/// Returns [`VersionError::Incompatible`] when the verifier rejects the client.
pub fn verify_client_version(
    verifier: &impl VersionVerifier,
    version: &ClientVersion,
    reporter: &impl ProgressReporter,
) -> Result<(), VersionError> {
    reporter.step("verifying the Terraform client version...");
    match verifier.verify(version)? {
        Verification::Satisfied => {
            reporter.success("Terraform client version is supported");
        }
        Verification::Bypassed { reason } => reporter.warn(&reason),
    }
    Ok(())
}
