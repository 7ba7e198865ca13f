//! suds - a small build runner for stylesheets
//!
//! This library provides the core functionality: a manifest of named tasks
//! with declared prerequisites, and pipelines that stream files through
//! ordered transform stages (compile, minify, rename, write).

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod core;
pub mod manifest;
pub mod output;
pub mod paths;
pub mod stages;
