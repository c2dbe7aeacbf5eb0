//! # ShipRS CLI Wait Integration Tests
//!
//! File: cli/tests/wait.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/shiprs
//!
//! ## Overview
//!
//! Integration tests for the `shiprs wait` subcommand. The success path runs
//! the binary against a minimal canned HTTP responder on an ephemeral loopback
//! port; the failure path points it at a port nothing listens on.
//!
//! **Note:** The poll cadence is shortened via flags so the failure test does
//! not sit through the full 3-second default deadline. Attempt counts are
//! never asserted; only outcomes are.
//!

// Declare and use the common module
mod common;
use common::*;
// Import necessary items directly
use predicates::prelude::*;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Spawn a thread that answers every incoming connection with a minimal
/// HTTP 200 response, and return the port it listens on. The thread lives
/// for the remainder of the test process; the OS reclaims it on exit.
fn spawn_health_responder() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test listener");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            // Read whatever request bytes arrive, then answer unconditionally.
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(
                b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\nok",
            );
        }
    });
    port
}

/// # Test Wait Ready (`test_wait_ready`)
///
/// With a responder already listening, `shiprs wait` returns success and
/// reports readiness.
#[test]
fn test_wait_ready() {
    let port = spawn_health_responder();

    shiprs_cmd()
        .args([
            "wait",
            &port.to_string(),
            "--timeout-ms",
            "2000",
            "--interval-ms",
            "50",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("is ready"));
}

/// # Test Wait Timeout (`test_wait_timeout`)
///
/// With nothing listening, `shiprs wait` fails after approximately the
/// overall deadline and prints the timeout error.
#[test]
fn test_wait_timeout() {
    // Bind and drop a listener to find a port that is very likely closed.
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test listener");
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    shiprs_cmd()
        .args([
            "wait",
            &port.to_string(),
            "--timeout-ms",
            "400",
            "--interval-ms",
            "50",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Timed out waiting"));
}

/// # Test Wait Rejects Bad Path (`test_wait_rejects_bad_path`)
///
/// A `--path` that does not start with `/` is rejected before any polling.
#[test]
fn test_wait_rejects_bad_path() {
    shiprs_cmd()
        .args(["wait", "8080", "--path", "healthcheck", "--timeout-ms", "200"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must start with '/'"));
}
