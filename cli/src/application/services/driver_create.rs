//! Application service — create action.
//!
//! Prepares a Terraform root module for a test instance:
//!
//! 1. read the client version,
//! 2. verify it against the supported range,
//! 3. `terraform init` with the dialect of that version,
//! 4. `terraform workspace new <name>`, falling back once to
//!    `terraform workspace select <name>` when the workspace already exists.
//!
//! Running the action again against a prepared directory converges through
//! the fallback instead of failing. Imports only from `crate::domain` and
//! `crate::application::ports`.

use tracing::{debug, info};

use crate::application::ports::{CommandExecutor, ProgressReporter, VersionVerifier};
use crate::application::services::client_version::{read_client_version, verify_client_version};
use crate::domain::{
    ClientVersion, Command, CommandError, CompleteConfig, DialectGate, DriverConfig, DriverError,
    ExecutionOptions, InitFactory,
};

/// Outcome of the create action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// `workspace new` created the workspace.
    Created { workspace: String },
    /// The workspace already existed and was selected.
    Selected { workspace: String },
}

impl CreateOutcome {
    #[must_use]
    pub fn workspace(&self) -> &str {
        match self {
            Self::Created { workspace } | Self::Selected { workspace } => workspace,
        }
    }
}

/// State of one create run. Lives only for the duration of [`create`].
struct CreateRun {
    config: CompleteConfig,
    options: ExecutionOptions,
    client_version: ClientVersion,
}

impl CreateRun {
    fn new(config: &DriverConfig, workspace_name: &str) -> Self {
        Self {
            options: ExecutionOptions::from_config(config),
            config: config.complete(workspace_name),
            client_version: ClientVersion::Unknown,
        }
    }

    fn workspace(&self) -> &str {
        &self.config.workspace_name
    }

    fn init_command(&self) -> Command {
        InitFactory::new(self.client_version.clone(), DialectGate::default()).build(&self.config)
    }

    fn workspace_new(&self) -> Command {
        Command::WorkspaceNew {
            name: self.workspace().to_string(),
        }
    }

    fn workspace_select(&self) -> Command {
        Command::WorkspaceSelect {
            name: self.workspace().to_string(),
        }
    }
}

/// Run the create action.
///
/// Phases run strictly in sequence; the only retry is the single
/// `workspace select` after `workspace new` reports an existing workspace.
///
/// # Errors
///
/// Returns [`DriverError::Version`] if the client is unsupported (no mutating
/// command has run), or [`DriverError::Command`] with the tool's diagnostic if
/// any command fails.
pub async fn create(
    executor: &impl CommandExecutor,
    verifier: &impl VersionVerifier,
    reporter: &impl ProgressReporter,
    config: &DriverConfig,
    workspace_name: &str,
) -> Result<CreateOutcome, DriverError> {
    let mut run = CreateRun::new(config, workspace_name);
    info!(workspace = workspace_name, "creating Terraform instance");

    run.client_version = read_client_version(executor, &run.options, reporter).await?;
    verify_client_version(verifier, &run.client_version, reporter)?;
    initialize_directory(executor, reporter, &run).await?;
    let outcome = create_or_select_workspace(executor, reporter, &run).await?;

    debug!(?outcome, "create finished");
    Ok(outcome)
}

async fn initialize_directory(
    executor: &impl CommandExecutor,
    reporter: &impl ProgressReporter,
    run: &CreateRun,
) -> Result<(), CommandError> {
    reporter.step("initializing the Terraform working directory...");
    executor.run(&run.init_command(), &run.options).await?;
    reporter.success("initialized the Terraform working directory");
    Ok(())
}

async fn create_or_select_workspace(
    executor: &impl CommandExecutor,
    reporter: &impl ProgressReporter,
    run: &CreateRun,
) -> Result<CreateOutcome, CommandError> {
    let workspace = run.workspace();
    reporter.step(&format!("creating the {workspace} Terraform workspace..."));
    match executor.run(&run.workspace_new(), &run.options).await {
        Ok(_) => {
            reporter.success(&format!("created the {workspace} Terraform workspace"));
            Ok(CreateOutcome::Created {
                workspace: workspace.to_string(),
            })
        }
        Err(err) if err.is_recoverable() => {
            debug!(%err, "workspace exists; selecting it");
            select_workspace(executor, reporter, run).await
        }
        Err(err) => Err(err),
    }
}

async fn select_workspace(
    executor: &impl CommandExecutor,
    reporter: &impl ProgressReporter,
    run: &CreateRun,
) -> Result<CreateOutcome, CommandError> {
    let workspace = run.workspace();
    reporter.step(&format!("selecting the {workspace} Terraform workspace..."));
    executor.run(&run.workspace_select(), &run.options).await?;
    reporter.success(&format!("selected the {workspace} Terraform workspace"));
    Ok(CreateOutcome::Selected {
        workspace: workspace.to_string(),
    })
}
