//! End-to-end tests for the `treestat` binary.
//!
//! Runs the real executable against temporary trees. The in-process
//! `header` prober is used so ImageMagick is not required.
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn treestat(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_treestat"))
        .args(args)
        .output()
        .expect("failed to run treestat")
}

fn path_arg(p: &Path) -> &str {
    p.to_str().expect("temp dir path is UTF-8")
}

fn hello_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.txt"), "hello hello world").unwrap();
    fs::create_dir(tmp.path().join("empty")).unwrap();
    tmp
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn prints_text_report() {
    let tmp = hello_tree();
    let out = treestat(&["--prober", "header", "1", path_arg(tmp.path())]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Largest file:      \"a.txt\"\n"));
    assert!(stdout.contains("Largest file size: 17\n"));
    assert!(stdout.contains("Number of files:   1\n"));
    assert!(stdout.contains("Number of dirs:    2\n"));
    assert!(stdout.contains(" - \"hello\" x 2\n"));
    assert!(!stdout.contains("world"));
    assert!(stdout.contains("Vacant directories:\n - \"empty\"\n"));
}

#[test]
fn prints_json_report() {
    let tmp = hello_tree();
    let out = treestat(&["--json", "--prober", "header", "5", path_arg(tmp.path())]);
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["n_files"], 1);
    assert_eq!(report["most_common_words"][1]["word"], "world");
    assert_eq!(report["vacant_dirs"][0], "empty");
}

/// A missing `identify` program just means no images are found.
#[test]
fn missing_identify_program_is_not_fatal() {
    let tmp = hello_tree();
    let out = treestat(&[
        "--identify-cmd",
        "treestat-no-such-identify-binary",
        "3",
        path_arg(tmp.path()),
    ]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.ends_with("Largest images:\n--------------------------------------------------------------\n"));
}

#[test]
fn missing_directory_fails() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope");
    let out = treestat(&["3", path_arg(&missing)]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot enter directory"));
}

#[test]
fn usage_error_without_arguments() {
    let out = treestat(&[]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
}
