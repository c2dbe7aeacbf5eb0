//! # ShipRS Pack Command
//!
//! File: cli/src/commands/pack/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/shiprs
//!
//! ## Overview
//!
//! This module implements the `shiprs pack` command, which packages a file or
//! directory into a ZIP deployment bundle via the shared archive utility
//! (`common::archive::zip`).
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Parse command arguments (source path, optional output path).
//! 2. Load global ShipRS configuration to check for a default output directory.
//! 3. Determine the final archive path: either the one provided via `--output`
//!    or a default derived from the source's base name
//!    (`<output_dir>/<base name>.zip`, where `<output_dir>` comes from the
//!    `[pack]` config section and falls back to the current directory).
//! 4. Report whether the source is a directory or a single file. A source that
//!    cannot be stat'd is reported but *not* rejected: the packager itself
//!    writes an empty archive for a missing source, and that policy must stay
//!    observable from the CLI.
//! 5. Invoke the shared packager and report the entry count, or the
//!    empty-archive warning when the source was missing.
//!
//! ## Examples
//!
//! Usage examples:
//!
//! ```bash
//! # Package a directory; writes ./my_app.zip
//! shiprs pack ./my_app
//!
//! # Package with an explicit output path
//! shiprs pack ./my_app --output /tmp/bundles/my_app.zip
//!
//! # Package a single file; writes ./notes.txt.zip containing one entry
//! shiprs pack notes.txt
//! ```
//!
use crate::common::{archive, fs};
use crate::core::config; // Access configuration loading.
use crate::core::error::Result; // Standard Result type for error handling.
use anyhow::Context; // For adding context to errors.
use clap::Parser; // For parsing command-line arguments.
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// # Pack Arguments (`PackArgs`)
///
/// Defines the command-line arguments accepted by the `shiprs pack` command.
/// Uses the `clap` crate for parsing and validation.
#[derive(Parser, Debug)]
pub struct PackArgs {
    /// Path to the file or directory to package into the bundle.
    pub source: PathBuf,

    /// Optional: Path of the archive to create. The file is overwritten if it
    /// already exists; its parent directory must exist. If omitted, the
    /// archive is written as `<base name>.zip` under the configured
    /// `pack.output_dir` (or the current directory).
    #[arg(short, long)] // Define as `--output` or `-o`
    pub output: Option<PathBuf>,
}

/// # Handle Pack Command (`handle_pack`)
///
/// The main asynchronous handler function for the `shiprs pack` command.
/// It resolves the output path, delegates the actual archiving to
/// `common::archive::zip::package`, and reports the outcome.
///
/// ## Arguments
///
/// * `args`: The parsed `PackArgs` struct containing command-line options.
///
/// ## Returns
///
/// * `Result<()>`: Returns `Ok(())` when the archive was written (including
///   the deliberate empty-archive case for a missing source), or an `Err` if
///   configuration loading or the archive write fails.
pub async fn handle_pack(args: PackArgs) -> Result<()> {
    info!("Handling pack command..."); // Log entry point.
    debug!("Pack args: {:?}", args); // Log parsed arguments for debugging.

    // 1. Load configuration to potentially get a default output directory.
    let cfg = config::load_config().context("Failed to load ShipRS configuration")?;

    // 2. Determine the final archive path.
    let target = resolve_output_path(&args, &cfg)?;

    // 3. Report the kind of source being packaged. A stat failure is only a
    // warning here: the packager's missing-source policy (empty archive,
    // success) is the behavior the CLI must surface, not preempt.
    match fs::meta::is_directory(&args.source) {
        Ok(true) => info!("Packaging directory '{}'", args.source.display()),
        Ok(false) => info!("Packaging single file '{}'", args.source.display()),
        Err(err) => warn!(
            "Source '{}' cannot be stat'd ({}); an empty archive will be produced",
            args.source.display(),
            err
        ),
    }

    // 4. Run the packager.
    let summary = archive::zip::package(&args.source, &target)?;

    // 5. Report the outcome.
    if summary.source_missing {
        println!(
            "Warning: source '{}' was missing; wrote an empty archive to '{}'",
            args.source.display(),
            target.display()
        );
    } else {
        println!(
            "Packaged '{}' -> '{}' ({} entries)",
            args.source.display(),
            target.display(),
            summary.entries
        );
    }
    Ok(())
}

/// Resolve the archive output path: `--output` verbatim when given, otherwise
/// `<base name>.zip` under the configured output directory (falling back to
/// the current directory).
fn resolve_output_path(args: &PackArgs, cfg: &config::Config) -> Result<PathBuf> {
    if let Some(output) = &args.output {
        return Ok(output.clone());
    }

    // Derive the default archive name from the source's base name.
    let base_name = args
        .source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bundle".to_string()); // Fallback for root-like paths.
    let file_name = format!("{}.zip", base_name);

    let output_dir = match &cfg.pack.output_dir {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    Ok(output_dir.join(file_name))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_output_path_explicit_output_wins() {
        let args = PackArgs {
            source: PathBuf::from("/srv/my_app"),
            output: Some(PathBuf::from("/tmp/custom.zip")),
        };
        let cfg = config::Config::default();
        let resolved = resolve_output_path(&args, &cfg).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/custom.zip"));
    }

    #[test]
    fn test_resolve_output_path_uses_configured_dir() {
        let args = PackArgs {
            source: PathBuf::from("/srv/my_app"),
            output: None,
        };
        let mut cfg = config::Config::default();
        cfg.pack.output_dir = Some("/var/bundles".to_string());
        let resolved = resolve_output_path(&args, &cfg).unwrap();
        assert_eq!(resolved, PathBuf::from("/var/bundles/my_app.zip"));
    }

    #[test]
    fn test_resolve_output_path_defaults_to_current_dir() {
        let args = PackArgs {
            source: PathBuf::from("notes.txt"),
            output: None,
        };
        let cfg = config::Config::default();
        let resolved = resolve_output_path(&args, &cfg).unwrap();
        assert_eq!(
            resolved.file_name().and_then(|n| n.to_str()),
            Some("notes.txt.zip")
        );
    }
}
