// Copyright (c) 2024-2025 Goblinoid Contributors
// SPDX-License-Identifier: Apache-2.0
//
// Groovy management-console script emitter

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::btree_map::{BTreeMap, Entry};
use std::fmt;
use std::io::Write;

use crate::schema::config::GeneratorConfig;
use crate::schema::document::{LabelDefinition, SchemaDocument, LABEL_PROPERTY_KEY};
use crate::schema::validator::PropertyKey;
use crate::schema::{SchemaError, SchemaResult};

const FILE_HEADER: &str = "// Automatically generated file by Goblinoid.\n\n";

const INDEX_SEPARATOR: &str = "//\n// Indexes defined for the schema.\n//\n\n";

static NON_IDENTIFIER_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("valid identifier pattern"));

/// Progress of an emitter through the script sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitState {
    NotOpened,
    Header,
    Labels,
    Properties,
    Reserved,
    Indexes,
    Trailer,
    Closed,
}

impl fmt::Display for EmitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EmitState::NotOpened => "not opened",
            EmitState::Header => "header written",
            EmitState::Labels => "labels written",
            EmitState::Properties => "properties written",
            EmitState::Reserved => "reserved properties written",
            EmitState::Indexes => "indexes appended",
            EmitState::Trailer => "trailer written",
            EmitState::Closed => "closed",
        };
        write!(f, "{}", name)
    }
}

/// Writes a validated [`SchemaDocument`] as an idempotent schema script.
///
/// Every statement is guarded by an existence check, so replaying the script
/// against an already migrated database changes nothing.
pub struct SchemaEmitter<W: Write> {
    sink: W,
    config: GeneratorConfig,
    management: String,
    state: EmitState,
}

impl<W: Write> SchemaEmitter<W> {
    pub fn new(sink: W, config: GeneratorConfig) -> Self {
        let management = groovy_identifier(&config.management_variable);
        Self {
            sink,
            config,
            management,
            state: EmitState::NotOpened,
        }
    }

    pub fn state(&self) -> EmitState {
        self.state
    }

    /// Write the whole script and hand the flushed sink back
    pub fn emit(mut self, document: &SchemaDocument, index_block: Option<&str>) -> SchemaResult<W> {
        check_variables(document, &self.config)?;
        self.write_header()?;
        self.write_labels(document)?;
        self.write_properties(document)?;
        self.write_reserved(document)?;
        if let Some(block) = index_block {
            self.append_indexes(block)?;
        }
        self.write_trailer()?;
        self.finish()
    }

    pub fn write_header(&mut self) -> SchemaResult<()> {
        self.transition(&[EmitState::NotOpened], EmitState::Header)?;

        self.sink.write_all(FILE_HEADER.as_bytes())?;
        if self.config.remote_session {
            write!(
                self.sink,
                ":remote connect tinkerpop.server {} session\n:remote console\n\n\n",
                self.config.remote_config
            )?;
        }
        write!(self.sink, "{} = graph.openManagement()\n\n", self.management)?;
        Ok(())
    }

    pub fn write_labels(&mut self, document: &SchemaDocument) -> SchemaResult<()> {
        self.transition(&[EmitState::Header], EmitState::Labels)?;

        self.write_label_section(document.vertex_labels(), "vl", "VertexLabel")?;
        self.write_label_section(document.edge_labels(), "el", "EdgeLabel")?;
        Ok(())
    }

    pub fn write_properties(&mut self, document: &SchemaDocument) -> SchemaResult<()> {
        self.transition(&[EmitState::Labels], EmitState::Properties)?;

        for key in document.property_keys() {
            let variable = format!("{}_p", groovy_identifier(&key.name));
            self.write_property_key(&variable, key)?;
        }
        Ok(())
    }

    pub fn write_reserved(&mut self, document: &SchemaDocument) -> SchemaResult<()> {
        self.transition(&[EmitState::Properties], EmitState::Reserved)?;

        for key in document.reserved_keys() {
            self.write_property_key(reserved_variable(&key.name), key)?;
        }
        Ok(())
    }

    /// Append pre-authored index definitions verbatim
    pub fn append_indexes(&mut self, block: &str) -> SchemaResult<()> {
        self.transition(&[EmitState::Reserved], EmitState::Indexes)?;

        self.sink.write_all(INDEX_SEPARATOR.as_bytes())?;
        self.sink.write_all(block.as_bytes())?;
        Ok(())
    }

    pub fn write_trailer(&mut self) -> SchemaResult<()> {
        self.transition(&[EmitState::Reserved, EmitState::Indexes], EmitState::Trailer)?;

        write!(self.sink, "\n{}.commit()\n", self.management)?;
        Ok(())
    }

    /// Flush and release the sink
    pub fn finish(mut self) -> SchemaResult<W> {
        self.transition(&[EmitState::Trailer], EmitState::Closed)?;

        self.sink.flush()?;
        Ok(self.sink)
    }

    fn transition(&mut self, allowed: &[EmitState], next: EmitState) -> SchemaResult<()> {
        if !allowed.contains(&self.state) {
            return Err(SchemaError::EmitterState {
                from: self.state,
                to: next,
            });
        }
        log::debug!("Schema emitter: {} -> {}", self.state, next);
        self.state = next;
        Ok(())
    }

    fn write_label_section(
        &mut self,
        labels: &[LabelDefinition],
        suffix: &str,
        api: &str,
    ) -> SchemaResult<()> {
        for definition in labels {
            let variable = format!("{}_{}", groovy_identifier(&definition.label), suffix);
            let literal = groovy_literal(&definition.label);
            write!(
                self.sink,
                "{var} = {m}.get{api}('{lit}')\nif ({var} == null)\n  {var} = {m}.make{api}('{lit}').make()\n\n",
                var = variable,
                m = self.management,
                api = api,
                lit = literal,
            )?;
        }
        self.sink.write_all(b"\n")?;
        Ok(())
    }

    fn write_property_key(&mut self, variable: &str, key: &PropertyKey) -> SchemaResult<()> {
        let literal = groovy_literal(&key.name);
        write!(
            self.sink,
            "{var} = {m}.getPropertyKey('{lit}')\nif ({var} == null)\n  {var} = {m}.makePropertyKey('{lit}').dataType({class})",
            var = variable,
            m = self.management,
            lit = literal,
            class = key.class_literal(),
        )?;
        if let Some(cardinality) = key.cardinality {
            write!(self.sink, ".cardinality({})", cardinality.qualified_name())?;
        }
        self.sink.write_all(b".make()\n\n")?;
        Ok(())
    }
}

/// Render the complete script into a string
pub fn render(
    document: &SchemaDocument,
    config: &GeneratorConfig,
    index_block: Option<&str>,
) -> SchemaResult<String> {
    let buffer = SchemaEmitter::new(Vec::new(), config.clone()).emit(document, index_block)?;
    String::from_utf8(buffer)
        .map_err(|e| SchemaError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Every variable the script binds must name exactly one schema element
pub fn check_variables(document: &SchemaDocument, config: &GeneratorConfig) -> SchemaResult<()> {
    let mut bound: BTreeMap<String, String> = BTreeMap::new();
    let mut bind = |variable: String, owner: String| match bound.entry(variable) {
        Entry::Occupied(entry) => Err(SchemaError::VariableCollision {
            variable: entry.key().clone(),
            first: entry.get().clone(),
            second: owner,
        }),
        Entry::Vacant(entry) => {
            entry.insert(owner);
            Ok(())
        }
    };

    bind(
        groovy_identifier(&config.management_variable),
        format!("management handle '{}'", config.management_variable),
    )?;
    for definition in document.vertex_labels() {
        bind(
            format!("{}_vl", groovy_identifier(&definition.label)),
            format!("vertex label '{}'", definition.label),
        )?;
    }
    for definition in document.edge_labels() {
        bind(
            format!("{}_el", groovy_identifier(&definition.label)),
            format!("edge label '{}'", definition.label),
        )?;
    }
    for key in document.property_keys() {
        bind(
            format!("{}_p", groovy_identifier(&key.name)),
            format!("property key '{}'", key.name),
        )?;
    }
    for key in document.reserved_keys() {
        bind(
            reserved_variable(&key.name).to_string(),
            format!("property key '{}'", key.name),
        )?;
    }
    Ok(())
}

fn reserved_variable(name: &str) -> &'static str {
    if name == LABEL_PROPERTY_KEY {
        "lbl"
    } else {
        "type"
    }
}

/// Turn a label or property name into a usable Groovy variable stem
pub fn groovy_identifier(name: &str) -> String {
    let mut identifier = NON_IDENTIFIER_CHARS.replace_all(name, "_").into_owned();
    if identifier.is_empty() || identifier.starts_with(|c: char| c.is_ascii_digit()) {
        identifier.insert(0, '_');
    }
    identifier
}

/// Escape a value for a single-quoted Groovy string
pub fn groovy_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '\'' => literal.push_str("\\'"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c => literal.push(c),
        }
    }
    literal
}
