//! `tfkit validate` — validate the root module with the installed client.

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::application::services::client_version::RequirementVerifier;
use crate::application::services::driver_validate::validate;

/// Run the validate command.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the client is unsupported,
/// or `terraform validate` fails.
pub async fn run(app: &AppContext) -> Result<()> {
    let config = app.load_config()?;
    let verifier =
        RequirementVerifier::from_config(&config).context("invalid version_requirement")?;
    let executor = app.executor(&config);

    let stdout = validate(&executor, &verifier, &app.reporter(), &config).await?;
    if !app.output.quiet {
        print!("{stdout}");
    }
    Ok(())
}
