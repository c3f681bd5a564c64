// Copyright (c) 2024-2025 Goblinoid Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command definitions for Goblinoid

use clap::{Parser, ValueEnum};
use goblinoid::schema::config::DEFAULT_REMOTE_CONFIG;
use goblinoid::GeneratorConfig;
use std::path::PathBuf;

/// Log level options
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only errors
    Error,
    /// Warnings and errors
    Warn,
    /// Info, warnings, and errors
    Info,
    /// Debug messages and above (verbose)
    Debug,
    /// All messages including trace (very verbose)
    Trace,
    /// Disable all logging
    Off,
}

impl LogLevel {
    /// Convert to log::LevelFilter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

/// Goblinoid CLI - create a graph database schema from model definitions
#[derive(Parser, Debug)]
#[command(name = "goblinoid")]
#[command(about = "Create a JanusGraph schema script from graph model definitions")]
#[command(version)]
pub struct Cli {
    /// Model manifest (JSON) holding the entity definitions
    #[arg(short = 'm', long = "manifest", env = "GOBLINOID_MANIFEST")]
    pub manifest: PathBuf,

    /// Name of the model collection inside the manifest
    #[arg(short = 'i', long = "models-iterable", env = "GOBLINOID_MODELS_ITERABLE")]
    pub models_iterable: String,

    /// Where to write the generated schema script
    #[arg(
        long = "schema-file",
        default_value = "./schema.groovy",
        env = "GOBLINOID_SCHEMA_FILE"
    )]
    pub schema_file: PathBuf,

    /// Pre-authored index definitions appended verbatim to the schema script
    #[arg(long = "indexes-file", env = "GOBLINOID_INDEXES_FILE")]
    pub indexes_file: Option<PathBuf>,

    /// Omit the remote console preamble (script runs where `graph` is bound)
    #[arg(long, env = "GOBLINOID_EMBEDDED")]
    pub embedded: bool,

    /// Remote configuration used by `:remote connect`
    #[arg(
        long = "remote-config",
        default_value = DEFAULT_REMOTE_CONFIG,
        env = "GOBLINOID_REMOTE_CONFIG"
    )]
    pub remote_config: String,

    /// Print the derived labels and property keys
    #[arg(long)]
    pub summary: bool,

    /// Set log level (error, warn, info, debug, trace, off)
    #[arg(short = 'l', long = "log-level", value_enum)]
    pub log_level: Option<LogLevel>,

    /// Be verbose about what's going on (equivalent to --log-level debug)
    #[arg(short = 'v', long = "verbose", env = "GOBLINOID_VERBOSE")]
    pub verbose: bool,
}

impl Cli {
    pub fn generator_config(&self) -> GeneratorConfig {
        let config = if self.embedded {
            GeneratorConfig::embedded()
        } else {
            GeneratorConfig::remote()
        };
        config.with_remote_config(self.remote_config.clone())
    }

    /// Level requested on the command line; `RUST_LOG` can still refine it
    pub fn level_filter(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if let Some(level) = self.log_level {
            level.to_level_filter()
        } else {
            log::LevelFilter::Info
        }
    }
}
