//! # ShipRS Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/shiprs
//!
//! ## Overview
//!
//! This module serves as the root and organizational entry point for all shared,
//! common utility modules used throughout the ShipRS CLI application. It
//! aggregates functionality related to cross-cutting concerns: archive
//! creation, filesystem queries, and network readiness polling.
//!
//! By centralizing these utilities under the `common::` namespace, ShipRS aims to
//! promote code reuse, maintain consistency, and provide clear separation between
//! command-specific logic (`commands::`) and core infrastructure (`core::`).
//!
//! ## Architecture
//!
//! The `common` module itself primarily consists of declarations (`pub mod`) for its
//! various submodules. Each submodule encapsulates a specific domain of utility functions:
//!
//! - **`archive`**: Utilities for creating deployment bundle archives. Includes the `zip` submodule.
//! - **`fs`**: Filesystem metadata predicates. Includes the `meta` submodule.
//! - **`network`**: Network utilities, currently HTTP readiness polling. Includes the `http` submodule.
//!
//! ## Usage
//!
//! Command handlers and other parts of the application import specific functionalities
//! directly from the required submodule within `common`.
//!
//! ```rust
//! // Example importing from different common submodules
//! use crate::common::{archive, fs, network};
//! use std::path::Path;
//!
//! # async fn run_example() -> anyhow::Result<()> {
//! let source = Path::new("./app");
//! let target = Path::new("./app.zip");
//!
//! // Use Filesystem utilities
//! let packaging_dir = fs::meta::is_directory(source)?;
//!
//! // Use Archive utilities
//! let summary = archive::zip::package(source, target)?;
//!
//! // Use Network utilities
//! network::http::wait_for_http_port(8080, &network::http::WaitOptions::default()).await?;
//! # Ok(())
//! # }
//! ```
//!

/// Archive creation utilities (ZIP bundle packaging).
pub mod archive;
/// Filesystem metadata predicates.
pub mod fs;
/// Network utilities (HTTP readiness polling).
pub mod network;
