// Copyright (c) 2024-2025 Goblinoid Contributors
// SPDX-License-Identifier: Apache-2.0
//
// One-shot schema generation: derive, then open the sink and emit

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use crate::schema::config::GeneratorConfig;
use crate::schema::diagnostics::Diagnostics;
use crate::schema::document::SchemaDocument;
use crate::schema::emitter::{self, SchemaEmitter};
use crate::schema::types::EntityDefinition;
use crate::schema::{SchemaError, SchemaResult};

/// Drives a single schema generation run
#[derive(Debug, Clone, Default)]
pub struct SchemaGenerator {
    config: GeneratorConfig,
}

impl SchemaGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn derive<'e, I, E>(
        &self,
        entities: I,
        diagnostics: &mut dyn Diagnostics,
    ) -> SchemaResult<SchemaDocument>
    where
        I: IntoIterator<Item = &'e E>,
        E: EntityDefinition + ?Sized + 'e,
    {
        Ok(SchemaDocument::derive(entities, diagnostics)?)
    }

    pub fn render(&self, document: &SchemaDocument, index_block: Option<&str>) -> SchemaResult<String> {
        emitter::render(document, &self.config, index_block)
    }

    /// Write a derived document to `output`.
    ///
    /// Script variables are checked and the index file is read before `output`
    /// is created; a failed write removes the partially written file.
    pub fn write_to_path(
        &self,
        document: &SchemaDocument,
        output: &Path,
        indexes_file: Option<&Path>,
    ) -> SchemaResult<()> {
        emitter::check_variables(document, &self.config)?;

        let index_block = match indexes_file {
            Some(path) => {
                log::info!("Adding indexes from file {}", path.display());
                let block = fs::read_to_string(path).map_err(|source| SchemaError::IndexFile {
                    path: path.to_path_buf(),
                    source,
                })?;
                Some(block)
            }
            None => None,
        };

        let writer = BufWriter::new(File::create(output)?);
        let result = SchemaEmitter::new(writer, self.config.clone())
            .emit(document, index_block.as_deref())
            .map(drop);

        if result.is_err() {
            log::warn!("Removing incomplete schema file {}", output.display());
            let _ = fs::remove_file(output);
        }
        result
    }

    /// Derive the schema of `entities` and write it; nothing is created when derivation fails
    pub fn generate_file<'e, I, E>(
        &self,
        entities: I,
        output: &Path,
        indexes_file: Option<&Path>,
        diagnostics: &mut dyn Diagnostics,
    ) -> SchemaResult<SchemaDocument>
    where
        I: IntoIterator<Item = &'e E>,
        E: EntityDefinition + ?Sized + 'e,
    {
        let document = self.derive(entities, diagnostics)?;
        self.write_to_path(&document, output, indexes_file)?;
        Ok(document)
    }
}
