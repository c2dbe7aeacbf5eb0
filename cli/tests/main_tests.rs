//! # ShipRS CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/shiprs
//!
//! ## Overview
//!
//! This integration test file focuses on verifying the top-level behavior
//! of the `shiprs` command-line interface, such as handling standard flags
//! like `--version` and `--help`, and rejection of unknown subcommands.
//!

// Declare and use the common module for helpers like `shiprs_cmd()`
mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    shiprs_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pack"))
        .stdout(predicate::str::contains("wait"));
}

#[test]
fn test_unknown_subcommand_fails() {
    shiprs_cmd().arg("frobnicate").assert().failure();
}
