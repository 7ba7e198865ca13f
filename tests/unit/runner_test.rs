//! Tests for the task runner's graph traversal

use suds::core::models::Task;
use suds::core::services::runner::{Runner, RunnerError};
use tempfile::TempDir;

fn alias(name: &str, deps: &[&str]) -> Task {
    Task::alias(name, deps.iter().map(ToString::to_string).collect())
}

fn runner(tasks: Vec<Task>) -> (TempDir, Runner) {
    let dir = TempDir::new().unwrap();
    let runner = Runner::new(dir.path(), tasks);
    (dir, runner)
}

fn executed(runner: &Runner, name: &str) -> Vec<String> {
    runner
        .run(name)
        .unwrap()
        .into_iter()
        .map(|r| r.task)
        .collect()
}

// =============================================================================
// ORDERING TESTS
// =============================================================================

#[test]
fn test_prerequisite_runs_before_dependent() {
    let (_dir, runner) = runner(vec![alias("default", &["styles"]), alias("styles", &[])]);
    assert_eq!(executed(&runner, "default"), vec!["styles", "default"]);
}

#[test]
fn test_task_without_deps_runs_alone() {
    let (_dir, runner) = runner(vec![alias("default", &["styles"]), alias("styles", &[])]);
    assert_eq!(executed(&runner, "styles"), vec!["styles"]);
}

#[test]
fn test_chain_runs_in_dependency_order() {
    let (_dir, runner) = runner(vec![
        alias("a", &["b"]),
        alias("b", &["c"]),
        alias("c", &[]),
    ]);
    assert_eq!(executed(&runner, "a"), vec!["c", "b", "a"]);
}

#[test]
fn test_diamond_runs_shared_prerequisite_once() {
    let (_dir, runner) = runner(vec![
        alias("top", &["left", "right"]),
        alias("left", &["base"]),
        alias("right", &["base"]),
        alias("base", &[]),
    ]);
    let order = executed(&runner, "top");
    assert_eq!(order.iter().filter(|t| *t == "base").count(), 1);
    assert_eq!(order.first().map(String::as_str), Some("base"));
    assert_eq!(order.last().map(String::as_str), Some("top"));
}

// =============================================================================
// ERROR TESTS
// =============================================================================

#[test]
fn test_unknown_task_fails() {
    let (_dir, runner) = runner(vec![alias("default", &[])]);
    let err = runner.run("nope").unwrap_err();
    assert!(matches!(err, RunnerError::UnknownTask(name) if name == "nope"));
}

#[test]
fn test_unknown_dependency_fails() {
    let (_dir, runner) = runner(vec![alias("default", &["missing"])]);
    let err = runner.run("default").unwrap_err();
    assert!(matches!(err, RunnerError::UnknownTask(name) if name == "missing"));
}

#[test]
fn test_self_dependency_is_a_cycle() {
    let (_dir, runner) = runner(vec![alias("loop", &["loop"])]);
    let err = runner.run("loop").unwrap_err();
    assert!(matches!(err, RunnerError::CircularDependency(_)));
}

#[test]
fn test_longer_cycle_detected() {
    let (_dir, runner) = runner(vec![
        alias("a", &["b"]),
        alias("b", &["c"]),
        alias("c", &["a"]),
    ]);
    let err = runner.run("a").unwrap_err();
    assert!(matches!(err, RunnerError::CircularDependency(_)));
}

// =============================================================================
// RECORD TESTS
// =============================================================================

#[test]
fn test_alias_records_no_files_or_outputs() {
    let (_dir, runner) = runner(vec![alias("default", &[])]);
    let runs = runner.run("default").unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].files, 0);
    assert!(runs[0].outputs.is_empty());
}
