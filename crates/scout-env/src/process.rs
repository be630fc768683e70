//! Process control: conflicting-process cleanup and redirected execution

use std::path::Path;
use std::process::{ExitStatus, Stdio};
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Command error: {0}")]
    Command(#[from] std::io::Error),

    #[error("Failed to open stdout log {path}: {source}")]
    StdoutLog {
        path: String,
        source: std::io::Error,
    },
}

/// Terminate every running process with the given name, killall style.
///
/// A nonzero exit from the kill command means no matching process was
/// running, which callers treat as success.
pub async fn terminate_process_by_name(name: &str) -> Result<(), ProcessError> {
    debug!("Terminating any running '{}' process", name);

    let output = Command::new("killall").arg(name).output().await?;
    if output.status.success() {
        info!("Terminated running '{}' process(es)", name);
    } else {
        debug!("No running '{}' process to terminate", name);
    }
    Ok(())
}

/// Run a program with the given arguments, stdout redirected to a file.
///
/// The target file is created or truncated before the child starts. Waits
/// for the child and returns its exit status.
pub async fn run_redirecting_stdout(
    program: &Path,
    args: &[String],
    stdout_path: &Path,
) -> Result<ExitStatus, ProcessError> {
    debug!(
        "Running {} with {} args, stdout to {}",
        program.display(),
        args.len(),
        stdout_path.display()
    );

    let stdout_log =
        std::fs::File::create(stdout_path).map_err(|source| ProcessError::StdoutLog {
            path: stdout_path.display().to_string(),
            source,
        })?;

    let status = Command::new(program)
        .args(args)
        .stdout(Stdio::from(stdout_log))
        .status()
        .await?;

    info!("{} exited with {}", program.display(), status);
    Ok(status)
}
