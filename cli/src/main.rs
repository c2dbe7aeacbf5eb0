//! # ShipRS Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/shiprs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the ShipRS CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! The application follows a modular command structure:
//! - Each top-level command (`pack`, `wait`) is defined as a variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! Basic ShipRS usage:
//!
//! ```bash
//! # Get help
//! shiprs --help
//!
//! # Package a directory with increased verbosity
//! shiprs -vv pack ./my_app
//!
//! # Block until the service on port 8080 answers its health route
//! shiprs wait 8080
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to appropriate command handler
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Handles specific command logic (pack, wait).
mod common; // Contains shared utilities (archive, fs, network).
mod core; // Core infrastructure (errors, config).

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "shiprs",
    about = "📦 ShipRS 🚀: Deployment Bundle Packaging & Service Readiness Tooling",
    long_about = "Package files and directories into ZIP deployment bundles and wait for\n\
                  local services to become ready before wiring them together.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "p")]
    Pack(commands::pack::PackArgs),
    #[command(alias = "w")]
    Wait(commands::wait::WaitArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Use anyhow::Result directly
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Pack(args) => commands::pack::handle_pack(args).await,
        Commands::Wait(args) => commands::wait::handle_wait(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
