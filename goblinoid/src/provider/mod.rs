// Copyright (c) 2024-2025 Goblinoid Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Model providers - resolve entity definitions for the schema engine
//!
//! The engine only consumes [`EntityDefinition`](crate::schema::types::EntityDefinition)
//! values. Providers locate them; failures here are precondition failures of the
//! run, reported separately from schema validation errors.

pub mod manifest;

pub use manifest::ModelManifest;

use std::path::PathBuf;

use thiserror::Error;

/// Failures locating or decoding model definitions
#[derive(Error, Debug)]
pub enum InputResolutionError {
    #[error("Failed to read model manifest {}: {source}", path.display())]
    ManifestUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Model manifest {} is malformed: {reason}", path.display())]
    ManifestMalformed { path: PathBuf, reason: String },

    #[error("Failed to get models iterable '{collection}' from {}, available: [{}]", path.display(), available.join(", "))]
    CollectionNotFound {
        collection: String,
        path: PathBuf,
        available: Vec<String>,
    },

    #[error("Requested models iterable '{collection}' from {} is not iterable but {found}", path.display())]
    CollectionNotIterable {
        collection: String,
        path: PathBuf,
        found: String,
    },

    #[error("Entity #{index} of models iterable '{collection}' is invalid: {reason}")]
    InvalidEntity {
        collection: String,
        index: usize,
        reason: String,
    },
}
