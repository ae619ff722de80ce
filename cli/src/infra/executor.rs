//! Infrastructure implementation of the `CommandExecutor` port.
//!
//! `TerraformExecutor<R>` renders command descriptors into process arguments,
//! runs them through a `CommandRunner`, and classifies the outcome.

use std::path::PathBuf;
use std::process::Output;

use tracing::{debug, warn};

use crate::application::ports::{CommandExecutor, CommandRunner};
use crate::domain::workspace::reports_workspace_exists;
use crate::domain::{Command, CommandError, ExecutionOptions};

/// Variables every Terraform command runs with unless the caller overrides them.
const AUTOMATION_ENVIRONMENT: &[(&str, &str)] = &[("TF_IN_AUTOMATION", "true")];

/// Variables removed so Terraform output is not localised.
const UNSET_ENVIRONMENT: &[&str] = &["LC_ALL"];

/// Routes Terraform commands through a `CommandRunner`.
///
/// Generic over `R: CommandRunner` so that tests can inject a mock runner
/// without spawning real processes.
pub struct TerraformExecutor<R: CommandRunner> {
    client: PathBuf,
    runner: R,
}

impl<R: CommandRunner> TerraformExecutor<R> {
    pub fn new(client: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            client: client.into(),
            runner,
        }
    }
}

/// Caller options plus the automation defaults; caller entries win.
fn automation_options(options: &ExecutionOptions) -> ExecutionOptions {
    let mut merged = options.clone();
    for (key, value) in AUTOMATION_ENVIRONMENT {
        merged
            .environment
            .entry((*key).to_string())
            .or_insert_with(|| (*value).to_string());
    }
    for key in UNSET_ENVIRONMENT {
        if !merged.environment.contains_key(*key) && !merged.unset.iter().any(|k| k == key) {
            merged.unset.push((*key).to_string());
        }
    }
    merged
}

fn classify(command: &Command, output: Output) -> Result<String, CommandError> {
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if output.status.success() {
        return Ok(stdout);
    }
    let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
    if let Some(workspace) = command.new_workspace()
        && (reports_workspace_exists(&stderr, workspace)
            || reports_workspace_exists(&stdout, workspace))
    {
        return Err(CommandError::WorkspaceExists {
            workspace: workspace.to_string(),
            message: stderr,
        });
    }
    Err(CommandError::Failed {
        command: command.to_string(),
        code: output.status.code(),
        stderr,
    })
}

impl<R: CommandRunner> CommandExecutor for TerraformExecutor<R> {
    async fn run(
        &self,
        command: &Command,
        options: &ExecutionOptions,
    ) -> Result<String, CommandError> {
        let program = self.client.to_string_lossy();
        let options = automation_options(options);
        debug!(client = %program, %command, "running terraform");

        let output = self
            .runner
            .run(&program, &command.args(), &options)
            .await
            .map_err(|e| CommandError::Launch {
                command: command.to_string(),
                message: format!("{e:#}"),
            })?;

        let result = classify(command, output);
        if let Err(err) = &result
            && !err.is_recoverable()
        {
            warn!(%command, "terraform command failed");
        }
        result
    }
}
