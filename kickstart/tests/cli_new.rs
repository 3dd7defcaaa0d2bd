//! CLI tests for project creation.
//!
//! Spawns the kickstart binary with `true`/`false` standing in for the VCS and
//! extraction tools, and verifies exit codes and the files left behind.

#![cfg(unix)]

use std::fs;
use std::process::{Command, Stdio};

use kickstart::exit_codes;
use kickstart::test_support::TestWorkspace;

fn kickstart(ws: &TestWorkspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_kickstart"));
    cmd.current_dir(ws.path())
        .stdin(Stdio::null())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn all_tools_succeeding_exits_ok() {
    let ws = TestWorkspace::new().expect("workspace");
    let output = kickstart(&ws)
        .args(["demo", "--starter", "cli", "--vcs", "true", "--extract", "true"])
        .output()
        .expect("run kickstart");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Project folder created: demo"), "{stdout}");
    assert!(stdout.contains("Initial commit created."), "{stdout}");
    assert!(
        stdout.contains("Starter project (CLIStarter) unzipped into demo."),
        "{stdout}"
    );
    let readme = fs::read_to_string(ws.path().join("demo/README.md")).expect("readme");
    assert!(readme.starts_with("# demo"));
}

#[test]
fn failing_extractor_exits_partial() {
    let ws = TestWorkspace::new().expect("workspace");
    let output = kickstart(&ws)
        .args(["demo", "-s", "api", "--vcs", "true", "--extract", "false"])
        .output()
        .expect("run kickstart");

    assert_eq!(output.status.code(), Some(exit_codes::PARTIAL));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to unzip starter project (APIStarter):"),
        "{stderr}"
    );
    assert!(ws.path().join("demo/.gitignore").is_file());
}

#[test]
fn missing_name_without_terminal_exits_invalid() {
    let ws = TestWorkspace::new().expect("workspace");
    let output = kickstart(&ws)
        .args(["--starter", "cli"])
        .output()
        .expect("run kickstart");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no interactive terminal"), "{stderr}");
    let entries = fs::read_dir(ws.path()).expect("read_dir").count();
    assert_eq!(entries, 1, "only templates/ should exist");
}

#[test]
fn file_in_the_way_exits_invalid() {
    let ws = TestWorkspace::new().expect("workspace");
    fs::write(ws.path().join("demo"), "occupied").expect("seed");
    let output = kickstart(&ws)
        .args(["demo", "--starter", "cli", "--vcs", "true", "--extract", "true"])
        .output()
        .expect("run kickstart");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is not a directory"), "{stderr}");
}

#[test]
fn config_file_supplies_executables() {
    let ws = TestWorkspace::new().expect("workspace");
    fs::write(
        ws.path().join("kickstart.toml"),
        "vcs_executable = \"true\"\nextract_executable = \"true\"\n",
    )
    .expect("config");
    let status = kickstart(&ws)
        .args(["new", "from-config", "--starter", "relational"])
        .status()
        .expect("run kickstart");

    assert_eq!(status.code(), Some(exit_codes::OK));
    assert!(ws.path().join("from-config/README.md").is_file());
}

#[test]
fn config_init_writes_defaults() {
    let ws = TestWorkspace::new().expect("workspace");
    let status = kickstart(&ws)
        .args(["config", "init"])
        .status()
        .expect("run kickstart");

    assert_eq!(status.code(), Some(exit_codes::OK));
    let written = fs::read_to_string(ws.path().join("kickstart.toml")).expect("config");
    assert!(written.contains("vcs_executable = \"git\""), "{written}");
}
