//! # ShipRS Network Utilities Module (`common::network`)
//!
//! File: cli/src/common/network/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/shiprs
//!
//! ## Overview
//!
//! This module centralizes network-related utilities for the ShipRS CLI.
//! Its main resident today is the HTTP readiness poller behind `shiprs wait`,
//! which repeatedly probes a local service's health endpoint until the
//! service answers or a deadline passes.
//!
//! ## Architecture
//!
//! The module is organized into submodules:
//!
//! - **`http`**: (Implemented) HTTP readiness polling against
//!   `http://127.0.0.1:<port><path>`, with a per-attempt request timeout and
//!   an independent overall deadline.
//! - **`discovery`**: (Planned) Would contain network discovery helpers such
//!   as finding an available local port. Not yet implemented.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::network::http::{wait_for_http_port, WaitOptions};
//!
//! # async fn run_example() -> anyhow::Result<()> {
//! // Poll port 8080 with the default cadence (100ms interval, 3s deadline).
//! wait_for_http_port(8080, &WaitOptions::default()).await?;
//! println!("Service is up");
//! # Ok(())
//! # }
//! ```
//!

/// HTTP readiness polling for local services.
pub mod http;

// pub mod discovery; // Future submodule placeholder
