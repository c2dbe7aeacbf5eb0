//! # ShipRS Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/shiprs
//!
//! ## Overview
//!
//! This module aggregates all top-level commands that comprise the ShipRS CLI.
//! It serves as the central point for importing and re-exporting command modules
//! to make them accessible to the main application entry point (`main.rs`).
//!
//! ## Architecture
//!
//! The commands follow a hierarchical structure:
//! - Top-level modules represent commands (e.g., `pack`, `wait`)
//! - Each command defines its own arguments structure and handler function
//! - All modules are made public for access from `main.rs`
//!
//! ## Commands
//!
//! - `pack`: Package a file or directory into a ZIP deployment bundle
//! - `wait`: Poll a local service's health endpoint until it is ready
//!
//! Each command defines its own arguments structure and handler function
//! to process those arguments and implement the command's functionality.
//!

/// Command for packaging a file or directory into a ZIP deployment bundle.
pub mod pack;
/// Command for polling a local service's health endpoint until it responds.
pub mod wait;
