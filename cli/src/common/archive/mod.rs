//! # ShipRS Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/shiprs
//!
//! ## Overview
//!
//! This module serves as the main interface and organizational unit for archive-related
//! utilities within the ShipRS CLI. It aggregates functionality for creating
//! deployment bundle archives. The primary use case is packaging an application
//! directory (or a single file) into a ZIP archive ready for upload.
//!
//! ## Architecture
//!
//! The module is designed to contain specialized submodules for different archive
//! formats or related operations:
//!
//! - **`zip`**: (Implemented) Provides the recursive ZIP packager used by
//!   `shiprs pack`. Writes deflate-compressed file entries and explicit
//!   directory entries, preserving the source's relative structure.
//!
//! ## Usage
//!
//! Functionality from submodules is typically accessed through this parent module, although
//! direct imports are possible.
//!
//! ```rust
//! use crate::common::archive; // Import the main archive module
//! use std::path::Path;
//!
//! // Example: Package a directory into a ZIP bundle using the `zip` submodule
//! # fn run() -> anyhow::Result<()> {
//! let source = Path::new("./my_app");
//! let target = Path::new("./my_app.zip");
//! let summary = archive::zip::package(source, target)?;
//!
//! println!("Wrote {} entries to {}", summary.entries, target.display());
//! # Ok(())
//! # }
//! ```
//!

pub mod zip;
