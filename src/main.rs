//
//  bookstack-client
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bookstack_client::cli::{Cli, Commands};
use bookstack_client::{exit_codes, ApiError};

fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command and exit
    match run(cli) {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            if let Some(seconds) = e.downcast_ref::<ApiError>().and_then(ApiError::retry_after) {
                eprintln!("Retry after {} seconds", seconds);
            }
            std::process::exit(exit_code(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("BOOKSTACK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Maps classified API errors onto process exit codes.
fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ApiError>() {
        Some(ApiError::AuthenticationFailed(_) | ApiError::PermissionDenied(_)) => {
            exit_codes::AUTH_ERROR
        }
        Some(ApiError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(ApiError::RateLimited { .. }) => exit_codes::RATE_LIMIT,
        _ => exit_codes::ERROR,
    }
}

/// Main command dispatcher
fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List(cmd) => cmd.run(&cli.global),
        Commands::Get(cmd) => cmd.run(&cli.global),
        Commands::Search(cmd) => cmd.run(&cli.global),
        Commands::Export(cmd) => cmd.run(&cli.global),
        Commands::Api(cmd) => cmd.run(&cli.global),
        Commands::Config(cmd) => cmd.run(&cli.global),
        Commands::Version => {
            println!("bookstack version {}", bookstack_client::VERSION);
            Ok(())
        }
    }
}
