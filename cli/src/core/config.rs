//! # ShipRS Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/shiprs
//!
//! ## Overview
//!
//! This module implements the configuration system for ShipRS, handling loading,
//! merging, validation, and access to configuration data. It supports a multi-level
//! configuration approach that combines defaults, user settings, and project-specific
//! overrides.
//!
//! ## Architecture
//!
//! The configuration system follows these principles:
//! - Configuration is loaded from multiple sources in order of precedence
//! - Paths are validated and expanded (e.g., `~` to home directory)
//! - Configuration is validated for correctness before use
//! - Structured data models ensure type safety
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.shiprs.toml` in current directory or ancestors
//! 2. User-specific `~/.config/shiprs/config.toml`
//! 3. Default values defined in the code
//!
//! ## Examples
//!
//! Loading and using configuration:
//!
//! ```rust
//! let cfg = config::load_config()?;
//!
//! // Access packaging settings
//! let output_dir = &cfg.pack.output_dir;
//!
//! // Access readiness poll settings
//! let endpoint = &cfg.wait.endpoint_path;
//! let interval = cfg.wait.attempt_interval_ms;
//! ```
//!
//! The configuration is loaded once per command execution and passed
//! to the modules that need it.
//!
use crate::core::error::{Result, ShiprsError}; // Use error from the same core module
use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The file name searched for in the current directory and its ancestors.
const PROJECT_CONFIG_FILENAME: &str = ".shiprs.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub pack: PackConfig,
    #[serde(default)]
    pub wait: WaitConfig,
    // Add other top-level configuration sections here
}

/// Configuration specific to bundle packaging (`shiprs pack ...`).
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PackConfig {
    /// Directory where generated archives are written when `--output` is not
    /// given (can use ~). Will be expanded. Defaults to the current directory.
    #[serde(default)]
    pub output_dir: Option<String>,
}

/// Configuration specific to the readiness poller (`shiprs wait ...`).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WaitConfig {
    /// Path of the health endpoint polled on the local port. Must start with `/`.
    #[serde(default = "default_endpoint_path")]
    pub endpoint_path: String,
    /// Milliseconds between poll attempts.
    #[serde(default = "default_attempt_interval_ms")]
    pub attempt_interval_ms: u64,
    /// Per-attempt HTTP request timeout in milliseconds.
    #[serde(default = "default_attempt_timeout_ms")]
    pub attempt_timeout_ms: u64,
    /// Overall deadline in milliseconds before the wait gives up.
    #[serde(default = "default_overall_timeout_ms")]
    pub overall_timeout_ms: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        WaitConfig {
            endpoint_path: default_endpoint_path(),
            attempt_interval_ms: default_attempt_interval_ms(),
            attempt_timeout_ms: default_attempt_timeout_ms(),
            overall_timeout_ms: default_overall_timeout_ms(),
        }
    }
}

// --- Serde default helpers ---
// These mirror the hard-coded behavior of the original readiness poller:
// one attempt every 100ms, each bounded by 1s, for at most 3s overall.

fn default_endpoint_path() -> String {
    "/healthcheck".to_string()
}

fn default_attempt_interval_ms() -> u64 {
    100
}

fn default_attempt_timeout_ms() -> u64 {
    1000
}

fn default_overall_timeout_ms() -> u64 {
    3000
}

/// # Load Configuration (`load_config`)
///
/// Loads the effective ShipRS configuration by merging, in order of
/// precedence: project-specific `.shiprs.toml` (current directory or
/// ancestors, stopping at the repository root), the user configuration
/// file, and built-in defaults.
///
/// ## Returns
///
/// * `Result<Config>` - The merged and validated configuration.
///
/// ## Errors
///
/// Returns an `Err` if a configuration file exists but cannot be read or
/// parsed, or if a loaded value fails validation.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged).context("Failed to expand paths in configuration")?;
    validate_config(&merged)?;
    debug!("Effective configuration: {:?}", merged);
    Ok(merged)
}

/// Load the user-level configuration file, if one exists.
fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "ShipRS", "shiprs") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "No user configuration file found at: {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

/// Load the project-level configuration file, if one exists.
fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file (.shiprs.toml) found in current directory or ancestors."
        );
        Ok(None)
    }
}

/// Walk up from the current directory looking for `.shiprs.toml`, stopping
/// once a `.git` directory marks the repository root.
fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        let git_dir = path.join(".git");
        if project_config.exists() && project_config.is_file() {
            return Ok(Some(project_config));
        }
        if git_dir.exists() && git_dir.is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

/// Read and parse a single TOML configuration file.
fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Merge a project configuration over the user configuration.
/// A project value wins when it differs from the built-in default
/// (i.e. the project file explicitly set it).
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();

    merged.pack.output_dir = project_cfg.pack.output_dir.or(user.pack.output_dir);

    merged.wait.endpoint_path = if project_cfg.wait.endpoint_path != default_endpoint_path() {
        project_cfg.wait.endpoint_path
    } else {
        user.wait.endpoint_path
    };
    merged.wait.attempt_interval_ms =
        if project_cfg.wait.attempt_interval_ms != default_attempt_interval_ms() {
            project_cfg.wait.attempt_interval_ms
        } else {
            user.wait.attempt_interval_ms
        };
    merged.wait.attempt_timeout_ms =
        if project_cfg.wait.attempt_timeout_ms != default_attempt_timeout_ms() {
            project_cfg.wait.attempt_timeout_ms
        } else {
            user.wait.attempt_timeout_ms
        };
    merged.wait.overall_timeout_ms =
        if project_cfg.wait.overall_timeout_ms != default_overall_timeout_ms() {
            project_cfg.wait.overall_timeout_ms
        } else {
            user.wait.overall_timeout_ms
        };

    merged
}

/// Expand `~` in configured paths to the user's home directory.
fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(dir) = &config.pack.output_dir {
        config.pack.output_dir = Some(shellexpand::tilde(dir).into_owned());
    }
    Ok(())
}

/// Validate loaded configuration values before use.
fn validate_config(config: &Config) -> Result<()> {
    if !config.wait.endpoint_path.starts_with('/') {
        anyhow::bail!(ShiprsError::Config(format!(
            "wait.endpoint_path must start with '/': got '{}'",
            config.wait.endpoint_path
        )));
    }
    if config.wait.attempt_interval_ms == 0 {
        anyhow::bail!(ShiprsError::Config(
            "wait.attempt_interval_ms must be greater than zero".to_string()
        ));
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.wait.endpoint_path, "/healthcheck");
        assert_eq!(cfg.wait.attempt_interval_ms, 100);
        assert_eq!(cfg.wait.attempt_timeout_ms, 1000);
        assert_eq!(cfg.wait.overall_timeout_ms, 3000);
        assert_eq!(cfg.pack.output_dir, None);
    }

    #[test]
    fn test_parse_partial_toml_uses_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [wait]
            overall_timeout_ms = 10000
            "#,
        )
        .expect("TOML should parse");
        assert_eq!(cfg.wait.overall_timeout_ms, 10000);
        // Unset fields fall back to defaults.
        assert_eq!(cfg.wait.endpoint_path, "/healthcheck");
        assert_eq!(cfg.wait.attempt_interval_ms, 100);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str(
            r#"
            [wait]
            not_a_real_key = true
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user: Config = toml::from_str(
            r#"
            [pack]
            output_dir = "~/user-bundles"
            [wait]
            endpoint_path = "/status"
            "#,
        )
        .unwrap();
        let project: Config = toml::from_str(
            r#"
            [wait]
            endpoint_path = "/ready"
            "#,
        )
        .unwrap();
        let merged = merge_configs(user, Some(project));
        // Project explicitly set the endpoint, so it wins.
        assert_eq!(merged.wait.endpoint_path, "/ready");
        // Project left output_dir unset, so the user value survives.
        assert_eq!(merged.pack.output_dir.as_deref(), Some("~/user-bundles"));
    }

    #[test]
    fn test_expand_tilde_in_output_dir() {
        let mut cfg = Config::default();
        cfg.pack.output_dir = Some("~/bundles".to_string());
        expand_config_paths(&mut cfg).unwrap();
        let expanded = cfg.pack.output_dir.unwrap();
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("bundles"));
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let mut cfg = Config::default();
        cfg.wait.endpoint_path = "healthcheck".to_string();
        assert!(validate_config(&cfg).is_err());
    }
}
