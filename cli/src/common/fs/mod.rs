//! # ShipRS Filesystem Utilities Module (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/shiprs
//!
//! ## Overview
//!
//! This module centralizes filesystem query helpers shared across the ShipRS
//! CLI. It currently hosts metadata predicates used by the packaging command
//! to classify its source path before archiving.
//!
//! ## Architecture
//!
//! - **`meta`**: Metadata predicates (`is_directory`) built on `std::fs::metadata`,
//!   returning typed errors when the path cannot be stat'd.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs;
//! use std::path::Path;
//!
//! # fn run() -> anyhow::Result<()> {
//! if fs::meta::is_directory(Path::new("./my_app"))? {
//!     println!("Packaging a directory");
//! }
//! # Ok(())
//! # }
//! ```
//!

/// Metadata predicates for filesystem paths.
pub mod meta;
