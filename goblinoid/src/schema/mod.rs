// Copyright (c) 2024-2025 Goblinoid Contributors
// SPDX-License-Identifier: Apache-2.0
//
// Schema module - derivation, validation and emission of graph schema scripts
//
// Entity definitions flow one way: classification -> aggregation -> validation
// -> emission. No output is produced before the whole document validated.

pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod diagnostics;
pub mod document;
pub mod emitter;
pub mod generator;
pub mod types;
pub mod validator;

pub use validator::ValidationError;

use std::path::PathBuf;

use thiserror::Error;

use crate::provider::InputResolutionError;
use emitter::EmitState;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Schema validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Input resolution error: {0}")]
    InputResolution(#[from] InputResolutionError),

    #[error("Failed to read index definitions from {}: {source}", path.display())]
    IndexFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Script variable '{variable}' would be bound to both {first} and {second}")]
    VariableCollision {
        variable: String,
        first: String,
        second: String,
    },

    #[error("Schema emitter cannot move from '{from}' to '{to}'")]
    EmitterState { from: EmitState, to: EmitState },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type SchemaResult<T> = Result<T, SchemaError>;
