//! Fixed experiment parameters and external command composition
//!
//! A scout run passes a mix of fixed constants and operator-supplied values
//! to the experiment binary. The constants here mirror the deployed field
//! setup; changing one changes every run.

use std::path::PathBuf;

/// The experiment binary, resolved relative to the working directory.
pub const SCOUT_BIN: &str = "./wspace_ap_scout";

/// Measurement tool that competes for the link and is killed before a run.
pub const CONFLICTING_PROCESS: &str = "iperf";

/// Tunnel device the experiment binary sends batched packets through.
pub const TUNNEL_INTERFACE: &str = "tun0";

/// Wired (control-side) address of the access point.
pub const SERVER_IP_ETH: &str = "128.105.22.249";
/// Wireless-side address of the access point.
pub const SERVER_IP_ATH: &str = "192.168.10.1";
/// Wireless-side broadcast address.
pub const BROADCAST_IP_ATH: &str = "192.168.10.255";

/// Starting data rate handed to the rate controller.
pub const STARTING_RATE: u32 = 10;
/// ACK timeout in milliseconds.
pub const ACK_TIMEOUT_MS: u32 = 450;
/// Round-trip estimate in milliseconds. Should be at least 150ms when the
/// cellular delay is 100ms plus the batch sending duration (50ms).
pub const RTT_MS: u32 = 150;
/// Batch timeout in milliseconds.
pub const BATCH_TIMEOUT_MS: u32 = 10;
/// Channel coherence time in microseconds.
pub const COHERENCE_TIME_US: u32 = 50_000;
/// Upper bound on packets combined into one batch.
pub const MAX_BATCH_SIZE: u32 = 10;
/// Contiguous ACK timeouts tolerated before the link is declared down.
pub const MAX_CONTIGUOUS_TIMEOUTS: u32 = 3;

/// Per-packet header overhead added by batching.
pub const PER_PKT_LEN: u32 = 2;
/// Packet size the tunnel is provisioned for.
pub const TUNNEL_PKT_SIZE: u32 = 1448;

/// MTU for the tunnel device: a full batch of per-packet headers must still
/// fit inside the tunnel packet size.
pub fn tunnel_mtu() -> u32 {
    TUNNEL_PKT_SIZE - MAX_BATCH_SIZE * PER_PKT_LEN
}

/// Operator-supplied parameters for one scout run.
///
/// The four integers are forwarded to the experiment binary verbatim; the
/// binary owns their interpretation and no range checking happens here.
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchParams {
    /// Forward error correction toggle (0 or 1).
    pub use_fec: i32,
    /// Which rate-adaptation variant the binary should run.
    pub rate_adapt_version: i32,
    /// Packet duplication toggle (0 or 1).
    pub is_duplicate: i32,
    /// Retransmission budget per lost packet.
    pub num_retrans: i32,
    /// Directory receiving this run's log files.
    pub log_dir: PathBuf,
}

impl LaunchParams {
    /// GPS log file the experiment binary writes.
    pub fn gps_log_path(&self) -> PathBuf {
        self.log_dir.join("gps.dat")
    }

    /// Capture file for the experiment binary's stdout.
    pub fn server_log_path(&self) -> PathBuf {
        self.log_dir.join("server.dat")
    }
}

/// A fully composed invocation of the experiment binary.
#[derive(Clone, Debug)]
pub struct ScoutCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub stdout_path: PathBuf,
}

impl ScoutCommand {
    /// Compose the argument list for one run from the fixed constants and
    /// the operator-supplied parameters.
    pub fn compose(params: &LaunchParams) -> Self {
        let args = vec![
            "-S".into(),
            SERVER_IP_ETH.into(),
            "-s".into(),
            SERVER_IP_ATH.into(),
            "-m".into(),
            BROADCAST_IP_ATH.into(),
            "-i".into(),
            TUNNEL_INTERFACE.into(),
            "-R".into(),
            params.num_retrans.to_string(),
            "-r".into(),
            STARTING_RATE.to_string(),
            "-T".into(),
            ACK_TIMEOUT_MS.to_string(),
            "-t".into(),
            RTT_MS.to_string(),
            "-B".into(),
            BATCH_TIMEOUT_MS.to_string(),
            "-V".into(),
            params.use_fec.to_string(),
            "-v".into(),
            params.rate_adapt_version.to_string(),
            "-M".into(),
            COHERENCE_TIME_US.to_string(),
            "-O".into(),
            params.is_duplicate.to_string(),
            "-n".into(),
            MAX_CONTIGUOUS_TIMEOUTS.to_string(),
            "-f".into(),
            params.gps_log_path().display().to_string(),
        ];

        Self {
            program: PathBuf::from(SCOUT_BIN),
            args,
            stdout_path: params.server_log_path(),
        }
    }

    /// Render the invocation as a single shell-style line, for logging.
    pub fn to_command_line(&self) -> String {
        format!(
            "{} {} > {}",
            self.program.display(),
            self.args.join(" "),
            self.stdout_path.display()
        )
    }
}
