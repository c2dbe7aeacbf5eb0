//! # ShipRS ZIP Archive Operations (`common::archive::zip`)
//!
//! File: cli/src/common/archive/zip.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/shiprs
//!
//! ## Overview
//!
//! This module provides the recursive ZIP packager behind `shiprs pack`. Given a
//! source path (a directory or a single file) and a target path, it produces a
//! ZIP archive containing the source's contents, preserving relative directory
//! structure. It is the workhorse for turning an application directory into a
//! deployment bundle.
//!
//! ## Architecture
//!
//! The module leverages the `zip` crate for the archive container and the
//! `walkdir` crate for depth-first directory traversal.
//!
//! - When the source is a directory, every entry is archived under the
//!   directory's base name (packaging `/tmp/myapp` yields `myapp/...` entries),
//!   with the relative part computed against the source root rather than by
//!   string-prefix stripping, so trailing separators and platform separators
//!   cannot skew entry names.
//! - Directories are written as explicit entries (trailing slash, no content,
//!   "store" method), including empty directories and the source root itself.
//! - Files are written with the "deflate" method, their bytes streamed straight
//!   from disk into the archive writer.
//! - When the source is a single file, it is archived under its own base name
//!   with no directory prefix.
//!
//! ## Missing-source policy
//!
//! If the source path cannot be stat'd at all (typically: it does not exist),
//! `package` finalizes and returns **success** with an empty archive rather than
//! failing. Callers historically depend on "package whatever is there, even
//! nothing" when assembling optional bundle parts, so this behavior is kept
//! deliberately. It is surfaced in the [`PackageSummary::source_missing`] flag
//! and logged as a warning. TODO: revisit with the deploy-pipeline consumers
//! whether a missing source should become a hard error.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::zip;
//! use std::path::Path;
//! # use std::fs;
//! # use tempfile::tempdir;
//!
//! # fn main() -> anyhow::Result<()> {
//! # let temp_dir = tempdir()?;
//! # fs::write(temp_dir.path().join("file.txt"), "content")?;
//! let source = temp_dir.path();
//! let target = temp_dir.path().join("bundle.zip");
//!
//! let summary = zip::package(source, &target)?;
//! println!("Wrote {} entries", summary.entries);
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{Result, ShiprsError}; // Use the standard Result type from the core module
use anyhow::Context; // For adding contextual information to errors
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path};
use tracing::{debug, warn};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Outcome of one [`package`] call.
///
/// The `source_missing` flag makes the deliberate missing-source success case
/// visible to callers instead of leaving it indistinguishable from packaging
/// an empty directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageSummary {
    /// Number of entries (files and directories) written to the archive.
    pub entries: usize,
    /// True when the source path could not be stat'd and an empty archive was
    /// written instead of an error being returned.
    pub source_missing: bool,
}

/// # Package a Path into a ZIP Archive (`package`)
///
/// Creates a ZIP archive at `target` containing `source` and (when `source` is
/// a directory) everything beneath it, walked depth-first with directories
/// visited before their children. No ordering is guaranteed between sibling
/// entries beyond what the filesystem enumeration yields.
///
/// Entry names use forward-slash separators regardless of platform. For a
/// directory source, names are prefixed with the source's base name; for a
/// single-file source, the file is archived under its own base name. Directory
/// entries carry a trailing slash and no content. On Unix, each entry records
/// the source's permission bits.
///
/// If `target` already exists it is overwritten. Its parent directory must
/// already exist.
///
/// ## Arguments
///
/// * `source` - Path to the file or directory to package.
/// * `target` - Path at which the archive file is created.
///
/// ## Returns
///
/// * `Result<PackageSummary>` - Entry count plus the missing-source flag.
///
/// ## Errors
///
/// Returns an `Err` if:
/// - The target file cannot be created (`ShiprsError::ArchiveCreate`).
/// - An entry header cannot be written (`ShiprsError::ArchiveHeader`).
/// - A source file cannot be opened or read mid-walk (`ShiprsError::ArchiveCopy`).
///   The operation aborts immediately and the partially written archive is left
///   on disk; no cleanup or rollback is attempted.
/// - The directory walk itself fails, e.g. permission denied on a subdirectory
///   (`ShiprsError::Walk`).
///
/// A source that cannot be stat'd is **not** an error; see the module-level
/// notes on the missing-source policy.
pub fn package(source: &Path, target: &Path) -> Result<PackageSummary> {
    // Create the target archive file first. This happens before the source is
    // examined, so even the degenerate cases below leave a valid archive behind.
    let file = File::create(target).map_err(|e| ShiprsError::ArchiveCreate {
        path: target.to_path_buf(),
        source: e,
    })?;
    let mut archive = ZipWriter::new(BufWriter::new(file));

    // Stat the source. A failure here deliberately produces an empty archive
    // rather than an error (see module docs); the branch is explicit so the
    // policy is visible instead of hiding behind a swallowed error.
    let metadata = match fs::metadata(source) {
        Ok(meta) => meta,
        Err(err) => {
            warn!(
                "Source '{}' could not be stat'd ({}); writing an empty archive",
                source.display(),
                err
            );
            finalize(archive)?;
            return Ok(PackageSummary {
                entries: 0,
                source_missing: true,
            });
        }
    };

    // For a directory source, every entry name is prefixed with the directory's
    // base name. For a single file there is no prefix.
    let base_dir = if metadata.is_dir() {
        source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    } else {
        None
    };

    let mut entries = 0usize;
    // Depth-first walk; walkdir yields a directory before its children, which
    // keeps directory entries ahead of their contents in the archive.
    for entry in WalkDir::new(source) {
        // Walk errors (unreadable subdirectory, etc.) abort the whole operation.
        let entry = entry.map_err(ShiprsError::from)?;
        let name = entry_name(source, entry.path(), base_dir.as_deref())?;

        let mut options = SimpleFileOptions::default();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let meta = entry.metadata().map_err(ShiprsError::from)?;
            options = options.unix_permissions(meta.permissions().mode());
        }

        if entry.file_type().is_dir() {
            // Directory entry: trailing-slash marker, stored, no content. The
            // zip writer appends the trailing slash to the name itself.
            debug!("Adding directory entry: {}/", name);
            archive
                .add_directory(
                    name.clone(),
                    options.compression_method(CompressionMethod::Stored),
                )
                .map_err(|e| ShiprsError::ArchiveHeader { name, source: e })?;
        } else {
            // File entry: deflate, stream the bytes from disk.
            debug!("Adding file entry: {}", name);
            archive
                .start_file(
                    name.clone(),
                    options.compression_method(CompressionMethod::Deflated),
                )
                .map_err(|e| ShiprsError::ArchiveHeader { name, source: e })?;
            let mut reader = File::open(entry.path()).map_err(|e| ShiprsError::ArchiveCopy {
                path: entry.path().to_path_buf(),
                source: e,
            })?;
            io::copy(&mut reader, &mut archive).map_err(|e| ShiprsError::ArchiveCopy {
                path: entry.path().to_path_buf(),
                source: e,
            })?;
        }
        entries += 1;
    }

    finalize(archive)?;
    Ok(PackageSummary {
        entries,
        source_missing: false,
    })
}

/// Finalize the archive: write the central directory and flush the underlying
/// file. Called on every successful exit path; on error paths the writer's
/// `Drop` performs the same finalization best-effort.
fn finalize(archive: ZipWriter<BufWriter<File>>) -> Result<()> {
    let mut inner = archive
        .finish()
        .context("Failed to finalize archive central directory")?;
    inner.flush().context("Failed to flush archive to disk")?;
    Ok(())
}

/// Compute the archive entry name for a walked path.
///
/// The name is the walked path relative to the source root, joined with
/// forward slashes and prefixed with `base_dir` when one is given. For a
/// single-file source (no `base_dir`, relative path empty) the file's own
/// base name is used.
fn entry_name(root: &Path, path: &Path, base_dir: Option<&str>) -> Result<String> {
    // Proper root-relative computation; walked paths always live under `root`.
    let relative = path.strip_prefix(root).with_context(|| {
        format!(
            "Walked path '{}' is not under source root '{}'",
            path.display(),
            root.display()
        )
    })?;

    let mut parts: Vec<String> = Vec::new();
    if let Some(base) = base_dir {
        parts.push(base.to_string());
    }
    for component in relative.components() {
        if let Component::Normal(part) = component {
            parts.push(part.to_string_lossy().into_owned());
        }
    }

    if parts.is_empty() {
        // Single-file source: the walk visits only the file itself.
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ShiprsError::ArgumentParsing(format!(
                    "Source path '{}' has no base name",
                    path.display()
                ))
            })?;
        return Ok(name);
    }
    Ok(parts.join("/"))
}
