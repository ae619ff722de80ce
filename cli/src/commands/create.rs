//! `tfkit create` — initialize the root module and create or select the workspace.

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::services::client_version::RequirementVerifier;
use crate::application::services::driver_create::{CreateOutcome, create};
use crate::domain::{validate_workspace_name, workspace_name_for};

/// Arguments for the create command.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Test instance name; the workspace is `kitchen-terraform-<instance>`
    #[arg(long, default_value = "default")]
    pub instance: String,

    /// Use this workspace name instead of deriving it from the instance
    #[arg(long, conflicts_with = "instance")]
    pub workspace: Option<String>,
}

impl CreateArgs {
    /// Resolve the workspace name for this run.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not a valid workspace name.
    pub fn workspace_name(&self) -> Result<String> {
        let name = match &self.workspace {
            Some(name) => {
                validate_workspace_name(name)?;
                name.clone()
            }
            None => workspace_name_for(&self.instance)?,
        };
        Ok(name)
    }
}

/// Run the create command.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the client is unsupported,
/// or a Terraform command fails.
pub async fn run(app: &AppContext, args: &CreateArgs) -> Result<()> {
    let config = app.load_config()?;
    let workspace = args.workspace_name()?;
    let verifier =
        RequirementVerifier::from_config(&config).context("invalid version_requirement")?;
    let executor = app.executor(&config);

    let outcome = create(&executor, &verifier, &app.reporter(), &config, &workspace).await?;

    let state = match outcome {
        CreateOutcome::Created { .. } => "created",
        CreateOutcome::Selected { .. } => "selected (already existed)",
    };
    app.output.kv("workspace", outcome.workspace());
    app.output.kv("state", state);
    Ok(())
}
