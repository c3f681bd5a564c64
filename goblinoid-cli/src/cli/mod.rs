// Copyright (c) 2024-2025 Goblinoid Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for Goblinoid
//!
//! Provides the command-line interface that resolves models from a manifest
//! and writes the schema script.

pub mod commands;
pub mod generate;
pub mod output;

pub use commands::Cli;
pub use generate::handle_generate;
