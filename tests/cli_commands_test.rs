//! Integration tests for the `init` and `languages` commands.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn fencefmt(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fencefmt"));
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_init_creates_default_config() {
    let temp_dir = tempdir().unwrap();

    fencefmt(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = fs::read_to_string(temp_dir.path().join(".fencefmt.toml")).unwrap();
    assert!(content.contains("indent-size = 2"));
    assert!(content.contains("[languages]"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join(".fencefmt.toml");
    fs::write(&path, "print-width = 100\n").unwrap();

    fencefmt(temp_dir.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(path).unwrap(), "print-width = 100\n");
}

#[test]
fn test_init_custom_path_then_fmt_uses_it() {
    let temp_dir = tempdir().unwrap();

    fencefmt(temp_dir.path()).args(["init", "fencefmt.toml"]).assert().success();
    assert!(temp_dir.path().join("fencefmt.toml").is_file());

    fs::write(temp_dir.path().join("doc.md"), "Plain prose only.\n").unwrap();
    fencefmt(temp_dir.path()).args(["fmt", "doc.md"]).assert().success();
}

#[test]
fn test_languages_lists_aliases() {
    let temp_dir = tempdir().unwrap();

    fencefmt(temp_dir.path())
        .args(["languages", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TAG"))
        .stdout(predicate::str::is_match(r"yml\s+yaml\s+yaml").unwrap())
        .stdout(predicate::str::is_match(r"jsx\s+babel\s+javascript").unwrap())
        .stdout(predicate::str::contains("disabled").not());
}

#[test]
fn test_languages_shows_disabled_families() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join(".fencefmt.toml"), "[languages]\ncss = false\n").unwrap();

    fencefmt(temp_dir.path())
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("disabled"));
}
