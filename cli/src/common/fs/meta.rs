//! # ShipRS Filesystem Metadata Predicates
//!
//! File: cli/src/common/fs/meta.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/shiprs
//!
//! ## Overview
//!
//! Small metadata predicates over filesystem paths. These are pure queries:
//! they stat the path and report on what they find, with no side effects.
//!
//! The packaging command uses [`is_directory`] to report whether it is about
//! to bundle a directory tree or a single file. Note that it does *not* use
//! the predicate to pre-reject a missing source: the packager's own
//! missing-source policy (empty archive, success) must stay observable.
//!
use crate::core::error::{Result, ShiprsError};
use std::fs;
use std::path::Path;

/// # Is Directory (`is_directory`)
///
/// Stats `path` and reports whether it is a directory.
///
/// ## Arguments
///
/// * `path` - The filesystem path to examine.
///
/// ## Returns
///
/// * `Result<bool>` - `true` for a directory, `false` for anything else
///   (regular file, symlink target, etc. — the stat follows symlinks).
///
/// ## Errors
///
/// Returns `ShiprsError::Stat` if the path does not exist or cannot be
/// accessed.
pub fn is_directory(path: &Path) -> Result<bool> {
    let metadata = fs::metadata(path).map_err(|e| ShiprsError::Stat {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(metadata.is_dir())
}
