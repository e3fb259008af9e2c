//! Drives the built `tc-cli` binary directly to check its argv contract:
//! no subcommand, or an unrecognized one, must exit non-zero with a usage
//! line on stderr and nothing on stdout.

use std::process::Command;

fn tc_cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tc-cli"))
}

#[test]
fn no_subcommand_exits_nonzero_with_usage_on_stderr() {
    let output = tc_cli().output().expect("failed to run tc-cli");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.to_lowercase().contains("usage"));
}

#[test]
fn unrecognized_subcommand_exits_nonzero_with_usage_on_stderr() {
    let output = tc_cli().arg("not_a_real_subcommand").output().expect("failed to run tc-cli");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.to_lowercase().contains("usage"));
}

#[test]
fn help_flag_exits_zero_and_lists_both_subcommands() {
    let output = tc_cli().arg("--help").output().expect("failed to run tc-cli");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("make-base") || stdout.contains("make_base"));
    assert!(stdout.contains("process-requests") || stdout.contains("process_requests"));
}
