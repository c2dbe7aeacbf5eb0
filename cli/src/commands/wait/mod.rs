//! # ShipRS Wait Command
//!
//! File: cli/src/commands/wait/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/shiprs
//!
//! ## Overview
//!
//! This module implements the `shiprs wait` command, which blocks until a
//! local service answers on its health endpoint or a deadline passes. The
//! polling itself lives in the shared network utility
//! (`common::network::http`).
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Parse command arguments (port, optional cadence overrides).
//! 2. Load global ShipRS configuration for the `[wait]` section defaults.
//! 3. Merge arguments over configuration over built-in defaults into the
//!    effective `WaitOptions` (explicit CLI flags always win).
//! 4. Delegate to `wait_for_http_port` and report readiness or the timeout.
//!
//! ## Examples
//!
//! Usage examples:
//!
//! ```bash
//! # Wait for http://127.0.0.1:8080/healthcheck with the default cadence
//! shiprs wait 8080
//!
//! # Give a slow service ten seconds, polling every 250ms
//! shiprs wait 8080 --timeout-ms 10000 --interval-ms 250
//!
//! # Poll a non-default health route
//! shiprs wait 3000 --path /ready
//! ```
//!
use crate::common::network::http::{wait_for_http_port, WaitOptions};
use crate::core::config::{self, WaitConfig};
use crate::core::error::{Result, ShiprsError};
use anyhow::Context;
use clap::Parser;
use std::time::Duration;
use tracing::{debug, info};

/// # Wait Arguments (`WaitArgs`)
///
/// Defines the command-line arguments accepted by the `shiprs wait` command.
/// Every cadence knob is optional; unset knobs fall back to the `[wait]`
/// configuration section and then to built-in defaults.
#[derive(Parser, Debug)]
pub struct WaitArgs {
    /// Local TCP port whose health endpoint should be polled.
    pub port: u16,

    /// Optional: Health endpoint path (must start with `/`).
    /// Defaults to the configured `wait.endpoint_path` ("/healthcheck").
    #[arg(long)]
    pub path: Option<String>,

    /// Optional: Milliseconds between poll attempts. Defaults to 100.
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Optional: Per-attempt request timeout in milliseconds. Defaults to 1000.
    #[arg(long)]
    pub attempt_timeout_ms: Option<u64>,

    /// Optional: Overall deadline in milliseconds before giving up. Defaults to 3000.
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

/// # Handle Wait Command (`handle_wait`)
///
/// The main asynchronous handler function for the `shiprs wait` command.
/// Builds the effective polling options and delegates to the shared
/// readiness poller.
///
/// ## Arguments
///
/// * `args`: The parsed `WaitArgs` struct containing command-line options.
///
/// ## Returns
///
/// * `Result<()>`: Returns `Ok(())` once the service answers, or an `Err`
///   (`ShiprsError::Timeout`) when the deadline passes first.
pub async fn handle_wait(args: WaitArgs) -> Result<()> {
    info!("Handling wait command...");
    debug!("Wait args: {:?}", args);

    // Load configuration for the `[wait]` defaults, then let explicit CLI
    // flags override it.
    let cfg = config::load_config().context("Failed to load ShipRS configuration")?;
    let options = build_wait_options(&args, &cfg.wait)?;
    debug!("Effective wait options: {:?}", options);

    println!(
        "Waiting for http://127.0.0.1:{}{} ...",
        args.port, options.endpoint_path
    );
    wait_for_http_port(args.port, &options).await?;
    println!("Port {} is ready.", args.port);
    Ok(())
}

/// Merge CLI arguments over the `[wait]` configuration section into the
/// effective `WaitOptions`.
fn build_wait_options(args: &WaitArgs, cfg: &WaitConfig) -> Result<WaitOptions> {
    let endpoint_path = match &args.path {
        Some(path) => {
            if !path.starts_with('/') {
                anyhow::bail!(ShiprsError::ArgumentParsing(format!(
                    "--path must start with '/': got '{}'",
                    path
                )));
            }
            path.clone()
        }
        None => cfg.endpoint_path.clone(),
    };

    Ok(WaitOptions {
        attempt_timeout: Duration::from_millis(
            args.attempt_timeout_ms.unwrap_or(cfg.attempt_timeout_ms),
        ),
        attempt_interval: Duration::from_millis(
            args.interval_ms.unwrap_or(cfg.attempt_interval_ms),
        ),
        overall_timeout: Duration::from_millis(args.timeout_ms.unwrap_or(cfg.overall_timeout_ms)),
        endpoint_path,
    })
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn bare_args(port: u16) -> WaitArgs {
        WaitArgs {
            port,
            path: None,
            interval_ms: None,
            attempt_timeout_ms: None,
            timeout_ms: None,
        }
    }

    #[test]
    fn test_build_wait_options_defaults() {
        let options = build_wait_options(&bare_args(8080), &WaitConfig::default()).unwrap();
        assert_eq!(options.endpoint_path, "/healthcheck");
        assert_eq!(options.attempt_interval, Duration::from_millis(100));
        assert_eq!(options.attempt_timeout, Duration::from_secs(1));
        assert_eq!(options.overall_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_build_wait_options_cli_overrides_config() {
        let mut args = bare_args(8080);
        args.path = Some("/ready".to_string());
        args.timeout_ms = Some(10_000);
        let mut cfg = WaitConfig::default();
        cfg.endpoint_path = "/status".to_string();
        cfg.overall_timeout_ms = 5000;

        let options = build_wait_options(&args, &cfg).unwrap();
        assert_eq!(options.endpoint_path, "/ready");
        assert_eq!(options.overall_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_build_wait_options_rejects_relative_path() {
        let mut args = bare_args(8080);
        args.path = Some("healthcheck".to_string());
        let err = build_wait_options(&args, &WaitConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShiprsError>(),
            Some(ShiprsError::ArgumentParsing(_))
        ));
    }
}
