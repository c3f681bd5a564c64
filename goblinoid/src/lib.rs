// Copyright (c) 2024-2025 Goblinoid Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Goblinoid - derive a JanusGraph schema script from typed graph models
//!
//! Goblinoid walks a set of entity definitions, classifies each one as a vertex
//! or an edge, reconciles the properties they declare and writes an idempotent
//! Groovy script for the JanusGraph management console.
//!
//! # Features
//!
//! - **Static model description**: models implement [`EntityDefinition`]
//! - **Strict validation**: duplicate labels, role errors and conflicting
//!   property types or cardinalities stop the run before anything is written
//! - **Deterministic output**: the same models always produce the same bytes
//! - **Idempotent statements**: every creator is guarded by an existence check
//!
//! # Usage
//!
//! ```bash
//! goblinoid --manifest models.json --models-iterable MODELS \
//!     --schema-file schema.groovy --indexes-file indexes.groovy
//! ```

pub mod provider;
pub mod schema;

pub use provider::{InputResolutionError, ModelManifest};
pub use schema::config::GeneratorConfig;
pub use schema::diagnostics::{CollectedDiagnostics, Diagnostics, LogDiagnostics};
pub use schema::document::{LabelDefinition, SchemaDocument, SchemaSummary};
pub use schema::emitter::SchemaEmitter;
pub use schema::generator::SchemaGenerator;
pub use schema::types::{
    Attribute, Cardinality, DataType, Entity, EntityDefinition, EntityKind, PropertyDescriptor,
    PropertyRole,
};
pub use schema::validator::PropertyKey;
pub use schema::{SchemaError, SchemaResult, ValidationError};

/// Goblinoid version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Goblinoid crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
