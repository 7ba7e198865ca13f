//! Tests for source glob expansion

use std::path::PathBuf;

use suds::core::services::sources::{SourceError, collect, pattern_base};

use crate::common::{SIMPLE_SCSS, TestProject};

// =============================================================================
// PATTERN BASE TESTS
// =============================================================================

#[test]
fn test_pattern_base_flat_glob() {
    assert_eq!(pattern_base("css/*.scss"), PathBuf::from("css"));
}

#[test]
fn test_pattern_base_recursive_glob() {
    assert_eq!(pattern_base("css/**/*.scss"), PathBuf::from("css"));
}

#[test]
fn test_pattern_base_bare_glob() {
    assert_eq!(pattern_base("*.scss"), PathBuf::new());
}

#[test]
fn test_pattern_base_exact_path_excludes_file() {
    assert_eq!(pattern_base("css/themes/dark.scss"), PathBuf::from("css/themes"));
}

// =============================================================================
// COLLECT TESTS
// =============================================================================

#[test]
fn test_collect_returns_sorted_relative_entries() {
    let project = TestProject::new();
    project.add_file("css/zeta.scss", SIMPLE_SCSS);
    project.add_file("css/alpha.scss", SIMPLE_SCSS);

    let entries = collect(project.path(), "css/*.scss").unwrap();
    let paths: Vec<&PathBuf> = entries.iter().map(|e| &e.path).collect();
    assert_eq!(
        paths,
        vec![&PathBuf::from("alpha.scss"), &PathBuf::from("zeta.scss")]
    );
    assert_eq!(entries[0].contents, SIMPLE_SCSS);
}

#[test]
fn test_collect_ignores_non_matching_files() {
    let project = TestProject::new();
    project.add_file("css/style.scss", SIMPLE_SCSS);
    project.add_file("css/notes.txt", "not a stylesheet");

    let entries = collect(project.path(), "css/*.scss").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, PathBuf::from("style.scss"));
}

#[test]
fn test_collect_recursive_keeps_subpaths() {
    let project = TestProject::new();
    project.add_file("css/themes/dark.scss", SIMPLE_SCSS);

    let entries = collect(project.path(), "css/**/*.scss").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, PathBuf::from("themes/dark.scss"));
}

#[test]
fn test_collect_empty_match_is_ok() {
    let project = TestProject::new();
    let entries = collect(project.path(), "css/*.scss").unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_collect_missing_directory_is_ok() {
    let project = TestProject::new();
    let entries = collect(project.path(), "nowhere/*.scss").unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_collect_invalid_pattern_fails() {
    let project = TestProject::new();
    let err = collect(project.path(), "css/[").unwrap_err();
    assert!(matches!(err, SourceError::Pattern { .. }));
}
