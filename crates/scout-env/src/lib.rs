//! Environment preparation for wireless scout runs
//!
//! This crate is the OS-facing side of the experiment launcher: creating
//! the run's log directory, terminating measurement processes that would
//! compete for the link, setting the tunnel interface MTU via netlink, and
//! executing the experiment binary with its stdout captured to a log file.
//!
//! Every operation returns a `Result` so the caller decides whether a
//! failed step aborts the run or is merely reported.

pub mod link;
pub mod logdir;
pub mod process;

// Re-export commonly used operations
pub use link::set_interface_mtu;
pub use logdir::create_log_dir;
pub use process::{run_redirecting_stdout, terminate_process_by_name};
