//! Behavioural tests for the `graphgen` binary.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use rstest::rstest;
use tempfile::TempDir;

fn run_graphgen(args: &[&str], stdin: &str, rust_log: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_graphgen"));
    command
        .args(args)
        .env_remove("GRAPHGEN_LOG_FORMAT")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    match rust_log {
        Some(value) => {
            command.env("RUST_LOG", value);
        }
        None => {
            command.env_remove("RUST_LOG");
        }
    }

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(error) => panic!("failed to run graphgen: {error}"),
    };
    // Dropping the handle closes stdin so prompts see end of input.
    if let Some(mut input) = child.stdin.take()
        && let Err(error) = input.write_all(stdin.as_bytes())
    {
        panic!("failed to write graphgen stdin: {error}");
    }
    match child.wait_with_output() {
        Ok(output) => output,
        Err(error) => panic!("failed to collect graphgen output: {error}"),
    }
}

fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

fn answers(node_count: usize, base: &Path) -> String {
    format!("{node_count}\n{}\n", base.display())
}

#[rstest]
fn generate_with_logging_off_keeps_stderr_empty() {
    let dir = temp_dir();
    let base = dir.path().join("quiet");
    let output = run_graphgen(
        &["generate", "--seed", "1", "--edge-probability", "1"],
        &answers(5, &base),
        Some("off"),
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "graphgen failed: {stderr}");
    assert_eq!(stderr, "");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("N> Filename> Random graph generated with 5 nodes.\n"));
    let written = fs::read_to_string(dir.path().join("quiet.txt")).unwrap_or_default();
    assert_eq!(written.lines().count(), 10);
}

#[rstest]
#[case::default_level(None)]
#[case::debug_level(Some("debug"))]
fn logging_installs_without_conflict(#[case] rust_log: Option<&str>) {
    let dir = temp_dir();
    let base = dir.path().join("logged");
    let output = run_graphgen(&["generate", "--seed", "2"], &answers(20, &base), rust_log);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "graphgen failed: {stderr}");
    assert!(
        !stderr.contains("already configured elsewhere"),
        "unexpected logging conflict: {stderr}"
    );
}

#[rstest]
fn bare_invocation_prompts_and_generates() {
    let dir = temp_dir();
    let base = dir.path().join("bare");
    let output = run_graphgen(&[], &answers(8, &base), Some("off"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "graphgen failed: {stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("N> Filename> Random graph generated with 8 nodes.\n"));
    assert!(dir.path().join("bare.txt").exists());
}

#[rstest]
fn failure_exits_non_zero_and_reports_on_stderr() {
    let output = run_graphgen(&["generate"], "many\n", Some("off"));

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("node count must be a non-negative integer"));
}
