//! Integration tests for the `mdtsv` command-line interface.
//!
//! The clipboard is not available on build machines, so these tests drive
//! the binary through `--stdin` and point the log at a temporary file.

use std::{fs, path::Path};

use tempfile::tempdir;

#[macro_use]
mod prelude;
use prelude::*;

fn mdtsv(log: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mdtsv").expect("Failed to create cargo command for mdtsv");
    cmd.arg("--stdin").arg("--log-file").arg(log);
    cmd
}

#[test]
fn test_cli_version_flag() {
    Command::cargo_bin("mdtsv")
        .expect("Failed to create cargo command for mdtsv")
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("mdtsv {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_markdown_to_tsv() {
    let dir = tempdir().expect("failed to create temporary directory");
    mdtsv(&dir.path().join("log.txt"))
        .write_stdin("| A | B |\n|---|--:|\n| 1 | 2 |\n")
        .assert()
        .success()
        .stdout("A\tB\n---\t--:\n1\t2");
}

#[test]
fn test_cli_tsv_to_markdown() {
    let dir = tempdir().expect("failed to create temporary directory");
    let input = lines_vec![tsv_line(&["name", "qty"]), tsv_line(&["apple", "12"])];
    let expected = lines_vec![
        "| name  | qty |",
        "|-------|-----|",
        "| apple | 12  |",
    ];
    mdtsv(&dir.path().join("log.txt"))
        .write_stdin(joined(&input) + "\n")
        .assert()
        .success()
        .stdout(joined(&expected));
}

#[test]
fn test_cli_empty_input() {
    let dir = tempdir().expect("failed to create temporary directory");
    mdtsv(&dir.path().join("log.txt"))
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_logs_input_and_output() {
    let dir = tempdir().expect("failed to create temporary directory");
    let log = dir.path().join("log.txt");
    mdtsv(&log).write_stdin("|x|y|\n").assert().success();
    let text = fs::read_to_string(&log).expect("failed to read log file");
    assert!(text.contains("Read from stdin: \n|x|y|"));
    assert!(text.contains("Writing to stdout: \nx\ty"));
}

#[test]
fn test_cli_log_file_from_env() {
    let dir = tempdir().expect("failed to create temporary directory");
    let log = dir.path().join("env-log.txt");
    Command::cargo_bin("mdtsv")
        .expect("Failed to create cargo command for mdtsv")
        .arg("--stdin")
        .env("MDTSV_LOG_FILE", &log)
        .write_stdin("a\tb\n")
        .assert()
        .success();
    assert!(log.exists());
}
