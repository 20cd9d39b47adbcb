//! End-to-end tests for the code-to-text binary.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn source_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.cpp"), "int main() {}\n").unwrap();
    fs::write(dir.path().join("b.h"), "#pragma once\n").unwrap();
    fs::write(dir.path().join("c.txt"), "notes\n").unwrap();
    dir
}

#[test]
fn test_converts_directory_argument() {
    let dir = source_dir();

    let mut cmd = cargo_bin_cmd!("code-to-text");
    cmd.current_dir(dir.path()).arg(dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Converted: a.cpp -> a_cpp.txt"))
        .stdout(predicate::str::contains("Converted: b.h -> b_h.txt"))
        .stdout(predicate::str::contains("c.txt").not());

    assert_eq!(
        fs::read_to_string(dir.path().join("Text/a_cpp.txt")).unwrap(),
        "int main() {}\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("Text/b_h.txt")).unwrap(),
        "#pragma once\n"
    );
    assert!(!dir.path().join("Text/c_txt.txt").exists());
}

#[test]
fn test_defaults_to_current_directory() {
    let dir = source_dir();

    let mut cmd = cargo_bin_cmd!("code-to-text");
    cmd.current_dir(dir.path()).env_remove("CODE_TO_TEXT_DIR");

    cmd.assert().success();
    assert!(dir.path().join("Text/a_cpp.txt").is_file());
}

#[test]
fn test_directory_from_environment() {
    let dir = source_dir();
    let cwd = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("code-to-text");
    cmd.current_dir(cwd.path()).env("CODE_TO_TEXT_DIR", dir.path());

    cmd.assert().success();
    assert!(dir.path().join("Text/b_h.txt").is_file());
    assert!(!cwd.path().join("Text").exists());
}

#[test]
fn test_quiet_suppresses_notices() {
    let dir = source_dir();

    let mut cmd = cargo_bin_cmd!("code-to-text");
    cmd.current_dir(dir.path()).arg("--quiet").arg(dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Converted:").not());
    assert!(dir.path().join("Text/a_cpp.txt").is_file());
}

#[test]
fn test_json_report() {
    let dir = source_dir();

    let mut cmd = cargo_bin_cmd!("code-to-text");
    cmd.current_dir(dir.path())
        .arg("--quiet")
        .arg("--json")
        .arg(dir.path());

    let output = cmd.assert().success().get_output().stdout.clone();
    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(report["converted"].as_array().unwrap().len(), 2);
    assert_eq!(report["converted"][0]["output_name"], "a_cpp.txt");
    assert_eq!(report["converted"][0]["kind"], "C++ source");
    assert_eq!(report["failures"].as_array().unwrap().len(), 0);
}

#[test]
fn test_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");

    let mut cmd = cargo_bin_cmd!("code-to-text");
    cmd.current_dir(dir.path()).arg(&missing);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot access source directory"));
    assert!(!missing.exists());
}

#[test]
fn test_output_collision_fails() {
    let dir = source_dir();
    fs::write(dir.path().join("Text"), "occupied").unwrap();

    let mut cmd = cargo_bin_cmd!("code-to-text");
    cmd.current_dir(dir.path()).arg(dir.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Converted:").not())
        .stderr(predicate::str::contains("cannot create output directory"));
}

#[test]
fn test_keep_going_converts_remaining_files_but_fails() {
    let dir = source_dir();
    fs::write(dir.path().join("0_bad.cpp"), [0xff, 0xfe, 0xfd]).unwrap();

    let mut cmd = cargo_bin_cmd!("code-to-text");
    cmd.current_dir(dir.path()).arg("--keep-going").arg(dir.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Converted: a.cpp -> a_cpp.txt"))
        .stderr(predicate::str::contains("1 of 3 files could not be converted"));
    assert!(dir.path().join("Text/b_h.txt").is_file());
    assert!(!dir.path().join("Text/0_bad_cpp.txt").exists());
}

#[test]
fn test_abort_stops_on_unreadable_file() {
    let dir = source_dir();
    fs::write(dir.path().join("0_bad.cpp"), [0xff, 0xfe, 0xfd]).unwrap();

    let mut cmd = cargo_bin_cmd!("code-to-text");
    cmd.current_dir(dir.path()).arg(dir.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Converted:").not())
        .stderr(predicate::str::contains("failed to read"));
    assert!(!dir.path().join("Text/a_cpp.txt").exists());
}
