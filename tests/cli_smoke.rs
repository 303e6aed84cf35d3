#![allow(clippy::unwrap_used)]
//! CLI smoke tests for the demo binary.
//!
//! These run the real executable so the whole chain is covered: outer flag
//! pass, dispatch, per-command flag pass and the failure reporter.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn subcmd() -> Command {
    Command::cargo_bin("subcmd").unwrap()
}

#[test]
fn test_help_displays_usage() {
    subcmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Subcommand dispatch demo"))
        .stdout(predicate::str::contains("-a"));
}

#[test]
fn test_version_displays_version() {
    subcmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_dispatch_with_outer_and_inner_flags() {
    subcmd()
        .args(["-a", "one", "-b", "x", "y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("running with \"-a\" = true"))
        .stdout(predicate::str::contains(
            "running command \"one\" with \"-b\" = true and args = [\"x\", \"y\"]",
        ))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_dispatch_without_outer_flags() {
    subcmd()
        .args(["two", "z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("running with \"-a\" = false"))
        .stdout(predicate::str::contains(
            "running command \"two\" with \"-c\" = false and args = [\"z\"]",
        ));
}

#[test]
fn test_list_prints_sorted_names() {
    subcmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("list\none\ntwo\n"));
}

#[test]
fn test_missing_command_exits_nonzero() {
    subcmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "[cmd] usage error: missing command; known commands: [\"list\", \"one\", \"two\"]",
        ));
}

#[test]
fn test_unrecognized_command_exits_nonzero() {
    subcmd()
        .arg("three")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unrecognized command \"three\""))
        .stderr(predicate::str::contains("[\"list\", \"one\", \"two\"]"));
}

#[test]
fn test_unknown_command_flag_is_reported_once() {
    let output = subcmd().args(["one", "-z"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.starts_with("[cmd] flag error:"));
    assert!(stderr.contains("-z"));
}

#[test]
fn test_command_help_uses_command_name() {
    subcmd()
        .args(["one", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: one"))
        .stdout(predicate::str::contains("-b"));
}
