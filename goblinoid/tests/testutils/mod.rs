//! Test utilities for Goblinoid integration tests
//!
//! SchemaFixture gives every test its own temporary directory for manifests,
//! index files and generated schema scripts.

pub mod schema_fixture;
