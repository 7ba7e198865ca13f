//! Basic CLI behavior tests

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn suds() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("suds"))
}

#[test]
fn test_version() {
    suds()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("suds"));
}

#[test]
fn test_help() {
    suds()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tasks live in suds.toml"));
}

#[test]
fn test_version_subcommand_json() {
    suds()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_bare_invocation_runs_default_task() {
    // With no manifest and no sources the default task still succeeds.
    let temp = TempDir::new().unwrap();

    suds()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Finished `default`"));
}

#[test]
fn test_init_creates_suds_toml() {
    let temp = TempDir::new().unwrap();

    suds()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created suds.toml"));

    assert!(temp.path().join("suds.toml").exists());
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();

    suds().arg("init").current_dir(temp.path()).assert().success();
    suds()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    suds()
        .args(["init", "--force"])
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn test_list_shows_stock_tasks() {
    let temp = TempDir::new().unwrap();

    suds()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("styles"))
        .stdout(predicate::str::contains("css/*.scss"))
        .stdout(predicate::str::contains("compile"));
}

#[test]
fn test_run_unknown_task_fails() {
    let temp = TempDir::new().unwrap();

    suds()
        .args(["run", "nope"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown task"));
}
