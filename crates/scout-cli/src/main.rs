//! Launcher CLI for wspace_ap_scout field experiments
//!
//! Prepares the host for one measurement run (log directory, conflicting
//! processes, tunnel MTU) and executes the experiment binary with the
//! standard flag set, capturing its stdout under the run's log directory.

mod commands;
mod config;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use commands::{cmd_launch, parse_params};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Forward error correction toggle (0 or 1)
    use_fec: String,

    /// Rate-adaptation variant selector
    rate_adapt_version: String,

    /// Packet duplication toggle (0 or 1)
    is_duplicate: String,

    /// Retransmission budget per lost packet
    num_retrans: String,

    /// Directory receiving this run's log files
    dirname: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; verbosity comes from RUST_LOG since the launch
    // surface recognizes no flags of its own
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    // Historical launcher contract: any argument-count problem prints the
    // usage message to stdout and exits cleanly, touching nothing
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if err.kind() == ErrorKind::DisplayHelp || err.kind() == ErrorKind::DisplayVersion =>
        {
            err.print()?;
            return Ok(());
        }
        Err(err) => {
            print!("{}", err);
            return Ok(());
        }
    };

    let params = parse_params(
        &cli.use_fec,
        &cli.rate_adapt_version,
        &cli.is_duplicate,
        &cli.num_retrans,
        &cli.dirname,
    )?;

    cmd_launch(params).await
}
