//! Launch sequence for one scout run
//!
//! Parameter parsing and the launch implementation live here, out of
//! main.rs, to enable unit testing. The environment steps are best-effort:
//! a failed step is logged and the run continues, matching how operators
//! drive these experiments in the field.

use std::path::PathBuf;

use anyhow::{Context, Result};
use scout_env::{
    create_log_dir, run_redirecting_stdout, set_interface_mtu, terminate_process_by_name,
};
use tracing::{info, warn};

use crate::config::{self, LaunchParams, ScoutCommand};

/// Parse the raw positional arguments into launch parameters.
///
/// The four numeric arguments must parse as base-10 integers; any integer,
/// negative included, is accepted. The directory name is taken as-is.
pub fn parse_params(
    use_fec: &str,
    rate_adapt_version: &str,
    is_duplicate: &str,
    num_retrans: &str,
    dirname: &str,
) -> Result<LaunchParams> {
    Ok(LaunchParams {
        use_fec: parse_int("use_fec", use_fec)?,
        rate_adapt_version: parse_int("rate_adapt_version", rate_adapt_version)?,
        is_duplicate: parse_int("is_duplicate", is_duplicate)?,
        num_retrans: parse_int("num_retrans", num_retrans)?,
        log_dir: PathBuf::from(dirname),
    })
}

fn parse_int(name: &str, value: &str) -> Result<i32> {
    value
        .parse()
        .with_context(|| format!("{} must be an integer, got '{}'", name, value))
}

/// Implementation of the launch: prepare the environment, then run the
/// experiment binary with its stdout captured to the run's server log.
pub async fn cmd_launch(params: LaunchParams) -> Result<()> {
    info!("Preparing scout run in {}", params.log_dir.display());

    if let Err(e) = create_log_dir(&params.log_dir).await {
        warn!(
            "Failed to create log directory {}: {}",
            params.log_dir.display(),
            e
        );
    }

    if let Err(e) = terminate_process_by_name(config::CONFLICTING_PROCESS).await {
        warn!("Failed to terminate {}: {}", config::CONFLICTING_PROCESS, e);
    }

    let mtu = config::tunnel_mtu();
    if let Err(e) = set_interface_mtu(config::TUNNEL_INTERFACE, mtu).await {
        warn!(
            "Failed to set MTU {} on {}: {}",
            mtu,
            config::TUNNEL_INTERFACE,
            e
        );
    }

    let command = ScoutCommand::compose(&params);
    info!("Running {}", command.to_command_line());

    match run_redirecting_stdout(&command.program, &command.args, &command.stdout_path).await {
        Ok(status) if status.success() => info!("Scout run completed"),
        Ok(status) => warn!("Scout run exited with {}", status),
        Err(e) => warn!("Failed to run {}: {}", command.program.display(), e),
    }

    Ok(())
}
