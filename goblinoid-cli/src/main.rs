// Copyright (c) 2024-2025 Goblinoid Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Goblinoid CLI entry point

use clap::Parser;
use colored::Colorize;

mod cli;
use cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments first to get log level
    let cli = Cli::parse();

    // Initialize logger (RUST_LOG can still override per module)
    env_logger::Builder::from_default_env()
        .filter_level(cli.level_filter())
        .init();

    log::debug!("Passed options: {:?}", cli);

    // Report the readable message rather than the error's debug form
    cli::handle_generate(&cli).map_err(|e| -> Box<dyn std::error::Error> {
        eprintln!("{}", "Schema generation failed".red());
        e.to_string().into()
    })
}
