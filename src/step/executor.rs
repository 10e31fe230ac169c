//! Low-level execution of a single step command.

use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

use super::result::StepCapture;

/// A step command that could not be executed at all.
///
/// Distinct from a command that ran and exited non-zero: these failures
/// carry no exit code and no captured output.
#[derive(Debug, Error)]
pub enum StepError {
    /// The child process could not be spawned (missing shell, unusable
    /// working directory, permission denied)
    #[error("could not start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The child was spawned but its exit status or output could not be
    /// collected
    #[error("could not collect output of `{command}`: {source}")]
    Collect {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Run one step command to completion in the given directory.
///
/// The command line is opaque to this layer and handed to the system shell
/// verbatim. Blocks until the child exits and records wall-clock duration.
/// `wait_with_output` drains both pipes concurrently, so a chatty child
/// cannot deadlock on a full pipe buffer.
///
/// No timeout is enforced; a hung tool blocks the run until the caller's
/// environment kills it.
pub fn run_step(command: &str, working_dir: &Path) -> Result<StepCapture, StepError> {
    let start = Instant::now();

    let child = spawn_shell_command(command, working_dir)?;
    let output = child
        .wait_with_output()
        .map_err(|source| StepError::Collect {
            command: command.to_string(),
            source,
        })?;

    let duration = start.elapsed();
    let exit_code = output.status.code();
    debug!(
        command,
        ?exit_code,
        elapsed_ms = duration.as_millis() as u64,
        "step finished"
    );

    Ok(StepCapture {
        exit_code,
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration,
    })
}

/// Spawn a step command through the system shell.
///
/// Uses `sh -c` on Unix and `cmd /C` on Windows. The command string is
/// passed as a single argument so this layer never splits or rewrites it.
fn spawn_shell_command(command: &str, working_dir: &Path) -> Result<Child, StepError> {
    let mut cmd = if cfg!(target_family = "unix") {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    } else {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    };

    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .current_dir(working_dir);

    cmd.spawn().map_err(|source| StepError::Spawn {
        command: command.to_string(),
        source,
    })
}
