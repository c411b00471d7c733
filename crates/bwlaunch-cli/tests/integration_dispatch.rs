//! End-to-end tests for the launcher binary.
//!
//! Each test drives the real `bwlaunch` executable with a controlled `PATH`
//! pointing at disposable script directories. The fixed install location
//! `/usr/local/bin/bwameth.py` would outrank any `PATH` entry, so tests that
//! rely on `PATH` resolution skip themselves on machines where it exists.

#![cfg(unix)]

use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const PREFERRED: &str = "/usr/local/bin/bwameth.py";
const TARGET: &str = "bwameth.py";

fn preferred_location_occupied() -> bool {
    Path::new(PREFERRED).exists()
}

fn write_target(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join(TARGET);
    fs::write(&path, body).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn run_launcher<I, S>(search_dirs: &[&Path], args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let path_value = env::join_paths(search_dirs.iter().copied()).unwrap();
    Command::new(env!("CARGO_BIN_EXE_bwlaunch"))
        .args(args)
        .env("PATH", path_value)
        .output()
        .expect("failed to run bwlaunch")
}

#[test]
fn arguments_and_identity_reach_the_target_verbatim() {
    if preferred_location_occupied() {
        eprintln!("skipping: {PREFERRED} exists on this machine");
        return;
    }

    let dir = TempDir::new().unwrap();
    let target = write_target(dir.path(), "#!/bin/sh\nprintf '%s\\n' \"$0\" \"$@\"\n");

    let output = run_launcher(&[dir.path()], ["a", "--flag", "b"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    // First line is the target's own view of its invocation name: the
    // resolved path, not the launcher's.
    assert_eq!(lines[0], target.display().to_string());
    assert_eq!(&lines[1..], ["a", "--flag", "b"]);
}

#[test]
fn child_exit_code_becomes_launcher_exit_code() {
    if preferred_location_occupied() {
        eprintln!("skipping: {PREFERRED} exists on this machine");
        return;
    }

    let dir = TempDir::new().unwrap();
    write_target(dir.path(), "#!/bin/sh\nexit 7\n");

    let output = run_launcher(&[dir.path()], Vec::<&str>::new());
    assert_eq!(output.status.code(), Some(7));
}

#[test]
fn earlier_search_directory_wins() {
    if preferred_location_occupied() {
        eprintln!("skipping: {PREFERRED} exists on this machine");
        return;
    }

    let early = TempDir::new().unwrap();
    let late = TempDir::new().unwrap();
    write_target(early.path(), "#!/bin/sh\necho early\n");
    write_target(late.path(), "#!/bin/sh\necho late\n");

    let output = run_launcher(&[early.path(), late.path()], Vec::<&str>::new());
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), "early");
}

#[test]
fn missing_target_exits_2_and_names_both_locations() {
    if preferred_location_occupied() {
        eprintln!("skipping: {PREFERRED} exists on this machine");
        return;
    }

    let empty = TempDir::new().unwrap();
    let output = run_launcher(&[empty.path()], Vec::<&str>::new());

    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains(TARGET), "stderr was: {stderr}");
    assert!(stderr.contains(PREFERRED), "stderr was: {stderr}");
    assert!(stderr.contains("PATH"), "stderr was: {stderr}");
}

#[test]
fn signal_death_is_relayed_with_shell_convention() {
    if preferred_location_occupied() {
        eprintln!("skipping: {PREFERRED} exists on this machine");
        return;
    }

    let dir = TempDir::new().unwrap();
    write_target(dir.path(), "#!/bin/sh\nkill -KILL $$\n");

    let output = run_launcher(&[dir.path()], Vec::<&str>::new());
    assert_eq!(output.status.code(), Some(128 + 9));
}
