//! # ShipRS Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/shiprs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that provide
//! foundational functionality for the ShipRS application. These components
//! handle configuration and error management.
//!
//! ## Architecture
//!
//! The core infrastructure consists of two key components:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//!
//! These components provide essential infrastructure that's used by
//! the command modules to implement their functionality.
//!
//! ## Usage
//!
//! Core infrastructure is imported by command handlers:
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{Result, ShiprsError}; // For error handling
//! ```
//!
//! These modules provide foundational capabilities that are used across
//! different parts of the application, ensuring consistent behavior.
//!
pub mod config;
pub mod error;
