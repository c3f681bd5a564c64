//! Schema fixture for Goblinoid integration tests
//!
//! Uses only the public crate API.

#![allow(dead_code)]

use goblinoid::{
    Cardinality, CollectedDiagnostics, DataType, Entity, GeneratorConfig, PropertyDescriptor,
    SchemaDocument, SchemaError, SchemaGenerator,
};
use std::path::{Path, PathBuf};

/// Test fixture with an isolated working directory
pub struct SchemaFixture {
    generator: SchemaGenerator,
    temp_dir: tempfile::TempDir,
}

impl SchemaFixture {
    /// Fixture emitting scripts with the remote console preamble
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Self::with_config(GeneratorConfig::remote())
    }

    pub fn with_config(config: GeneratorConfig) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            generator: SchemaGenerator::new(config),
            temp_dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Default schema output location
    pub fn schema_path(&self) -> PathBuf {
        self.path("schema.groovy")
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
        path
    }

    /// Derive and render in memory
    pub fn render(&self, entities: &[Entity]) -> Result<String, SchemaError> {
        let mut diagnostics = CollectedDiagnostics::new();
        let document = self.generator.derive(entities, &mut diagnostics)?;
        self.generator.render(&document, None)
    }

    /// Derive and write the schema file, optionally appending an index file
    pub fn generate(
        &self,
        entities: &[Entity],
        indexes_file: Option<&Path>,
    ) -> Result<SchemaDocument, SchemaError> {
        let mut diagnostics = CollectedDiagnostics::new();
        self.generator
            .generate_file(entities, &self.schema_path(), indexes_file, &mut diagnostics)
    }

    /// Generate and read the schema file back
    pub fn assert_generates(&self, entities: &[Entity], indexes_file: Option<&Path>) -> String {
        self.generate(entities, indexes_file)
            .unwrap_or_else(|e| panic!("Schema generation failed: {}", e));
        std::fs::read_to_string(self.schema_path())
            .unwrap_or_else(|e| panic!("Schema file not readable: {}", e))
    }

    /// Generation must fail, mention every expected fragment and leave no schema file behind
    pub fn assert_generation_fails(&self, entities: &[Entity], expected: &[&str]) -> SchemaError {
        let err = match self.generate(entities, None) {
            Ok(_) => panic!("Schema generation should have failed"),
            Err(e) => e,
        };

        let message = err.to_string();
        for fragment in expected {
            assert!(
                message.contains(fragment),
                "Expected error containing '{}', got: {}",
                fragment,
                message
            );
        }
        assert!(
            !self.schema_path().exists(),
            "Schema file must not be created on failure"
        );
        err
    }
}

/// `Person` vertex with a single-valued `name`
pub fn person() -> Entity {
    Entity::vertex("Person", "person").with_property(
        "name",
        PropertyDescriptor::vertex(DataType::String, Some(Cardinality::Single)),
    )
}

/// `Likes` edge with an integer `since`
pub fn likes() -> Entity {
    Entity::edge("Likes", "likes")
        .with_property("since", PropertyDescriptor::edge(DataType::Integer))
}

/// Assert `fragments` occur in `text` in the given order
pub fn assert_in_order(text: &str, fragments: &[&str]) {
    let mut cursor = 0;
    for fragment in fragments {
        match text[cursor..].find(fragment) {
            Some(offset) => cursor += offset + fragment.len(),
            None => panic!(
                "Expected '{}' after byte {} in:\n{}",
                fragment, cursor, text
            ),
        }
    }
}
