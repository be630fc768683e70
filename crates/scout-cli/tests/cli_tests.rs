//! Integration tests for the scout-cli launcher surface
//!
//! These cover the argument contract: wrong argument counts print the usage
//! message and exit cleanly without side effects, and malformed integers
//! are reported as errors before anything touches the environment.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper function to create a command instance for the scout-cli binary
fn cli_command() -> Command {
    Command::cargo_bin("scout-cli").expect("Failed to find scout-cli binary")
}

#[test]
fn no_arguments_prints_usage_and_exits_cleanly() {
    let mut cmd = cli_command();

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("scout-cli"));
}

#[test]
fn too_few_arguments_prints_usage_and_exits_cleanly() {
    let mut cmd = cli_command();
    cmd.args(["0", "1", "0", "2"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("scout-cli"));
}

#[test]
fn too_many_arguments_exits_cleanly_with_no_side_effects() {
    let base = tempfile::tempdir().unwrap();
    let dir = base.path().join("run1");

    let mut cmd = cli_command();
    cmd.args(["0", "1", "0", "2", dir.to_str().unwrap(), "extra"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));

    // The log directory must not have been created
    assert!(!dir.exists());
}

#[test]
fn help_names_every_positional_argument() {
    let mut cmd = cli_command();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("USE_FEC"))
        .stdout(predicate::str::contains("RATE_ADAPT_VERSION"))
        .stdout(predicate::str::contains("IS_DUPLICATE"))
        .stdout(predicate::str::contains("NUM_RETRANS"))
        .stdout(predicate::str::contains("DIRNAME"));
}

#[test]
fn version_names_the_binary() {
    let mut cmd = cli_command();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("scout-cli"));
}

#[test]
fn non_integer_argument_is_a_real_error() {
    let base = tempfile::tempdir().unwrap();
    let dir = base.path().join("run1");

    let mut cmd = cli_command();
    cmd.args(["yes", "1", "0", "2", dir.to_str().unwrap()]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("use_fec"));

    // Parsing fails before any environment step runs
    assert!(!dir.exists());
}

#[test]
fn non_integer_retrans_count_names_the_argument() {
    let base = tempfile::tempdir().unwrap();
    let dir = base.path().join("run1");

    let mut cmd = cli_command();
    cmd.args(["0", "1", "0", "two", dir.to_str().unwrap()]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("num_retrans"));
}
