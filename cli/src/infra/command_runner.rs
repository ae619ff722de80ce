//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution with guaranteed timeout and kill on all platforms.

use std::process::{Output, Stdio};

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;
use tracing::debug;

use crate::application::ports::CommandRunner;
use crate::domain::ExecutionOptions;

/// Production `CommandRunner` — uses tokio for async process execution
/// with guaranteed timeout and kill on all platforms.
///
/// On Windows, `tokio::time::timeout` around `.output().await` does NOT kill
/// the child process when the timeout fires — the future is dropped but the
/// OS process keeps running. This implementation uses `tokio::select!` with
/// explicit `child.kill()` to guarantee the process is terminated.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        options: &ExecutionOptions,
    ) -> Result<Output> {
        let mut command = tokio::process::Command::new(program);
        command
            .args(args)
            .current_dir(&options.working_directory)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        for key in &options.unset {
            command.env_remove(key);
        }
        command.envs(&options.environment);

        debug!(
            program,
            ?args,
            cwd = %options.working_directory.display(),
            timeout_secs = options.timeout.as_secs(),
            "spawning process"
        );
        let mut child = command
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        tokio::select! {
            result = async {
                let (status, stdout, stderr) = tokio::join!(
                    child.wait(),
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stdout_handle {
                            h.read_to_end(&mut buf).await?;
                        }
                        Ok::<_, std::io::Error>(buf)
                    },
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stderr_handle {
                            h.read_to_end(&mut buf).await?;
                        }
                        Ok::<_, std::io::Error>(buf)
                    },
                );
                Ok(Output {
                    status: status.with_context(|| format!("waiting for {program}"))?,
                    stdout: stdout.with_context(|| format!("reading stdout of {program}"))?,
                    stderr: stderr.with_context(|| format!("reading stderr of {program}"))?,
                })
            } => result,
            () = tokio::time::sleep(options.timeout) => {
                let _ = child.kill().await;
                anyhow::bail!("{program} timed out after {}s", options.timeout.as_secs())
            }
        }
    }
}
