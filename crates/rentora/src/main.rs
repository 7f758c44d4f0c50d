// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rentora - a rental operations backend.
//!
//! This is the binary entry point for the Rentora server.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};

mod seed;
mod serve;

/// Rentora - a rental operations backend.
#[derive(Parser, Debug)]
#[command(name = "rentora", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Rentora API server.
    Serve,
    /// Populate the database with a demo dataset.
    Seed,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match rentora_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            rentora_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await,
        Some(Commands::Seed) => seed::run_seed(config).await,
        None => {
            println!("rentora: use --help for available commands");
            return;
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
