//! # ShipRS HTTP Readiness Polling (`common::network::http`)
//!
//! File: cli/src/common/network/http.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/shiprs
//!
//! ## Overview
//!
//! This module implements the readiness poller behind `shiprs wait`. It issues
//! GET requests against a health endpoint on the local loopback interface
//! (`http://127.0.0.1:<port><path>`) on a fixed cadence until one request
//! yields *any* HTTP response, or an overall deadline passes.
//!
//! "Ready" deliberately means "the service answered at all": the HTTP status
//! code is ignored, because a service returning 500 from its health route is
//! still accepting connections, which is all deploy scripts need to know
//! before pointing traffic at it.
//!
//! ## Architecture
//!
//! Two independent, locally owned timers drive the loop:
//!
//! - a `tokio` interval that paces attempts (the first attempt fires one
//!   interval after the call, matching ticker semantics), and
//! - a single fixed deadline for the overall timeout, armed once at the start.
//!
//! Each individual request is bounded by the HTTP client's own per-attempt
//! timeout, so a hung connection cannot stall the loop beyond that budget.
//! Because the interval and the deadline are independent, the exact number of
//! attempts before a timeout is not deterministic; callers (and tests) should
//! only rely on the outcome and the approximate elapsed time.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::network::http::{wait_for_http_port, WaitOptions};
//! use std::time::Duration;
//!
//! # async fn run_example() -> anyhow::Result<()> {
//! let options = WaitOptions {
//!     overall_timeout: Duration::from_secs(10),
//!     ..WaitOptions::default()
//! };
//! wait_for_http_port(8080, &options).await?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{Result, ShiprsError};
use anyhow::Context;
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Tuning knobs for [`wait_for_http_port`].
///
/// The defaults reproduce the poller's historical cadence: one attempt every
/// 100ms, each bounded by 1 second, for at most 3 seconds overall, against
/// `/healthcheck`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitOptions {
    /// Upper bound on each individual HTTP request.
    pub attempt_timeout: Duration,
    /// Pause between the start of consecutive attempts.
    pub attempt_interval: Duration,
    /// Deadline for the whole wait, measured from the call.
    pub overall_timeout: Duration,
    /// Path of the health endpoint, starting with `/`.
    pub endpoint_path: String,
}

impl Default for WaitOptions {
    fn default() -> Self {
        WaitOptions {
            attempt_timeout: Duration::from_secs(1),
            attempt_interval: Duration::from_millis(100),
            overall_timeout: Duration::from_secs(3),
            endpoint_path: "/healthcheck".to_string(),
        }
    }
}

/// # Wait For HTTP Port (`wait_for_http_port`)
///
/// Polls `http://127.0.0.1:<port><endpoint_path>` until a request receives an
/// HTTP response (any status) or `options.overall_timeout` elapses.
///
/// ## Arguments
///
/// * `port` - Local TCP port the service is expected to listen on.
/// * `options` - Polling cadence and deadline; see [`WaitOptions`].
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` as soon as one attempt receives a response.
///
/// ## Errors
///
/// Returns `ShiprsError::Timeout` when the deadline passes without any
/// successful response. Building the HTTP client can also fail, though only
/// under unusual conditions (e.g. no system resources).
pub async fn wait_for_http_port(port: u16, options: &WaitOptions) -> Result<()> {
    // Per-attempt budget lives on the client, so every request it issues is
    // individually bounded.
    let client = reqwest::Client::builder()
        .timeout(options.attempt_timeout)
        .build()
        .context("Failed to build HTTP client for readiness polling")?;
    let url = format!("http://127.0.0.1:{}{}", port, options.endpoint_path);

    let start = Instant::now();
    let deadline = start + options.overall_timeout;
    // First attempt fires one interval after the call, ticker-style, not
    // immediately.
    let mut ticker = time::interval_at(start + options.attempt_interval, options.attempt_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match client.get(&url).send().await {
                    // Any response at all means the port is ready; the status
                    // code is deliberately ignored.
                    Ok(response) => {
                        info!(
                            "Port {} is ready: {} answered with status {}",
                            port,
                            url,
                            response.status()
                        );
                        return Ok(());
                    }
                    Err(err) => {
                        debug!("Port {} not ready yet: {}", port, err);
                    }
                }
            }
            _ = time::sleep_until(deadline) => {
                return Err(ShiprsError::Timeout {
                    port,
                    endpoint: options.endpoint_path.clone(),
                    waited_ms: start.elapsed().as_millis() as u64,
                }
                .into());
            }
        }
    }
}
