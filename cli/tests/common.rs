//! # ShipRS CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/shiprs
//!
//! ## Overview
//!
//! This module provides shared utility functions and re-exports common crates
//! used across multiple integration test files (`pack.rs`, `wait.rs`, etc.).
//! This avoids code duplication in the test suite.
//!
//! Integration tests are located in the `cli/tests/` directory and each `.rs` file
//! in that directory (that isn't a module like this one) is compiled as a separate
//! test crate linked against the main `shiprs` binary crate.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

// Re-export common crates/modules needed by multiple test files
pub use assert_cmd::Command;
// Note: predicates and tempfile are not re-exported from here.
// Individual test files should import them directly if needed using:
// use predicates::prelude::*;
// use tempfile::tempdir; // or other tempfile items

/// # Get ShipRS Command (`shiprs_cmd`)
///
/// Helper function to create an `assert_cmd::Command` instance pointing to the
/// compiled `shiprs` binary target for the current test run.
///
/// This ensures tests execute the correct binary being built.
///
/// ## Panics
/// Panics if the `shiprs` binary cannot be found via `Command::cargo_bin`.
///
/// ## Returns
/// * `Command` - An `assert_cmd::Command` ready to have arguments added and assertions run.
pub fn shiprs_cmd() -> Command {
    Command::cargo_bin("shiprs").expect("Failed to find shiprs binary for testing")
}
