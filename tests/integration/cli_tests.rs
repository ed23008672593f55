//! CLI integration tests.
//!
//! Exercise the built binary end to end. Tests skip silently when the
//! binary has not been built yet.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Get the path to the built binary.
fn binary_path() -> PathBuf {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    // Try release first, then debug
    let release_path = root.join("target/release/fsmgen");
    let debug_path = root.join("target/debug/fsmgen");

    if release_path.exists() {
        release_path
    } else {
        debug_path
    }
}

fn run_in(dir: &std::path::Path, args: &[&str]) -> Option<Output> {
    let binary = binary_path();
    if !binary.exists() {
        eprintln!("Skipping CLI test: binary not found");
        return None;
    }
    Command::new(&binary).current_dir(dir).args(args).output().ok()
}

#[test]
fn forward_run_generates_machine_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("door.fsm"), "Idle,Start,Running\nRunning,Stop,Idle\n").unwrap();

    let Some(out) = run_in(dir.path(), &["door.fsm"]) else {
        return;
    };

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Generated door FSM machine"));
    for file in ["door_tsk.c", "door_tsk.h", "door_api.c", "door_api.h"] {
        assert!(dir.path().join("door").join(file).is_file(), "missing {file}");
    }
}

#[test]
fn missing_descriptor_fails_with_its_path() {
    let dir = TempDir::new().unwrap();

    let Some(out) = run_in(dir.path(), &["nope.fsm"]) else {
        return;
    };

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("nope.fsm"));
}

#[test]
fn malformed_descriptor_names_the_line() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.fsm"), "Idle,Start,Running\nRunning,Stop\n").unwrap();

    let Some(out) = run_in(dir.path(), &["bad.fsm"]) else {
        return;
    };

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("bad.fsm:2"), "stderr: {stderr}");
}

#[test]
fn reverse_run_reports_table_count() {
    let dir = TempDir::new().unwrap();
    // The binary scans the parent of its working directory.
    let nested = dir.path().join("generator");
    fs::create_dir(&nested).unwrap();
    fs::write(
        dir.path().join("demo_tsk.c"),
        "static fsm_state_t demo[] = {\n  { (void*)demo_a, demo_EV1, (void*)demo_b },\n};\n",
    )
    .unwrap();

    let Some(out) = run_in(&nested, &[]) else {
        return;
    };

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Generated 1 FSM machines"));
    assert!(dir.path().join("docs/demo.txt").is_file());
    assert!(dir.path().join("docs/demo.html").is_file());
}
