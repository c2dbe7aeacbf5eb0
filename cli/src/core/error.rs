//! # ShipRS Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/shiprs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used throughout
//! the ShipRS application. It provides a consistent approach to error management
//! with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ShiprsError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover various domains:
//! - Configuration errors
//! - Filesystem stat errors
//! - Archive creation, header, and copy errors
//! - Directory walk errors
//! - Readiness poll timeout errors
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! return Err(ShiprsError::Stat { path: path.to_path_buf(), source: io_err })?;
//!
//! // Add context to errors using anyhow
//! let file = File::create(&target)
//!     .with_context(|| format!("Failed to create archive: {}", target.display()))?;
//!
//! // Pattern matching on error types
//! match result {
//!     Ok(summary) => println!("Wrote {} entries", summary.entries),
//!     Err(e) if e.downcast_ref::<ShiprsError>().map_or(false, |se| matches!(se, ShiprsError::Timeout { .. })) => {
//!         println!("Service never became ready");
//!     },
//!     Err(e) => return Err(e),
//! }
//! ```
//!
//! The error system provides detailed error messages to the user and
//! includes context information for debugging.
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the ShipRS application.
// No PartialEq derive because the io/zip source fields don't implement it.
#[derive(Error, Debug)]
pub enum ShiprsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to stat path '{path}': {source}")]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create archive '{path}': {source}")]
    ArchiveCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write archive header for entry '{name}': {source}")]
    ArchiveHeader {
        name: String,
        source: zip::result::ZipError,
    },

    #[error("Failed to copy '{path}' into archive: {source}")]
    ArchiveCopy {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Directory walk failed: {source}")]
    Walk {
        #[from]
        source: walkdir::Error,
    },

    #[error("Timed out waiting for http://127.0.0.1:{port}{endpoint} after {waited_ms} ms")]
    Timeout {
        port: u16,
        endpoint: String,
        waited_ms: u64,
    },

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
