// Copyright (c) 2024-2025 Goblinoid Contributors
// SPDX-License-Identifier: Apache-2.0
//
// Core model type definitions consumed by the schema engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of graph element an entity definition declares
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Vertex,
    Edge,
    /// Anything a model layer hands over that is neither a vertex nor an edge
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Vertex => write!(f, "vertex"),
            EntityKind::Edge => write!(f, "edge"),
            EntityKind::Other(kind) => write!(f, "{}", kind),
        }
    }
}

/// Property data types a model may declare.
///
/// The declarable set mirrors the JanusGraph primitive types; only a subset of
/// them is supported for schema generation (see [`DataType::is_supported`]).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    String,
    Character,
    Boolean,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    Date,
    Geoshape,
    Uuid,
}

impl DataType {
    /// Types a schema can be generated for
    pub const SUPPORTED: [DataType; 4] = [
        DataType::String,
        DataType::Integer,
        DataType::Float,
        DataType::Boolean,
    ];

    /// Java class literal used by the management API, `None` when unsupported
    pub fn class_literal(&self) -> Option<&'static str> {
        match self {
            DataType::String => Some("String.class"),
            DataType::Integer => Some("Integer.class"),
            DataType::Float => Some("Float.class"),
            DataType::Boolean => Some("Boolean.class"),
            // Valid in JanusGraph, but no model layer we generate for maps onto them
            DataType::Character
            | DataType::Byte
            | DataType::Short
            | DataType::Long
            | DataType::Double
            | DataType::Date
            | DataType::Geoshape
            | DataType::Uuid => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.class_literal().is_some()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::String => "string",
            DataType::Character => "character",
            DataType::Boolean => "boolean",
            DataType::Byte => "byte",
            DataType::Short => "short",
            DataType::Integer => "integer",
            DataType::Long => "long",
            DataType::Float => "float",
            DataType::Double => "double",
            DataType::Date => "date",
            DataType::Geoshape => "geoshape",
            DataType::Uuid => "uuid",
        };
        write!(f, "{}", name)
    }
}

/// How many values a vertex property may hold per vertex
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    Single,
    Set,
    List,
}

impl Cardinality {
    pub const ALL: [Cardinality; 3] = [Cardinality::Single, Cardinality::Set, Cardinality::List];

    /// Fully qualified enum constant understood by the management console
    pub fn qualified_name(&self) -> &'static str {
        match self {
            Cardinality::Single => "org.janusgraph.core.Cardinality.SINGLE",
            Cardinality::Set => "org.janusgraph.core.Cardinality.SET",
            Cardinality::List => "org.janusgraph.core.Cardinality.LIST",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::Single => write!(f, "single"),
            Cardinality::Set => write!(f, "set"),
            Cardinality::List => write!(f, "list"),
        }
    }
}

/// Role of a property descriptor. Only vertex properties carry a cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyRole {
    Vertex { cardinality: Option<Cardinality> },
    Edge,
}

impl PropertyRole {
    pub fn is_vertex(&self) -> bool {
        matches!(self, PropertyRole::Vertex { .. })
    }

    pub fn cardinality(&self) -> Option<Cardinality> {
        match self {
            PropertyRole::Vertex { cardinality } => *cardinality,
            PropertyRole::Edge => None,
        }
    }

    /// Short name used in diagnostics
    pub fn describe(&self) -> &'static str {
        match self {
            PropertyRole::Vertex { .. } => "vertex property",
            PropertyRole::Edge => "edge property",
        }
    }
}

/// A typed property attached to an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub data_type: DataType,
    pub role: PropertyRole,
    /// Name persisted in the database when it differs from the declared one
    pub db_name: Option<String>,
}

impl PropertyDescriptor {
    pub fn vertex(data_type: DataType, cardinality: Option<Cardinality>) -> Self {
        Self {
            data_type,
            role: PropertyRole::Vertex { cardinality },
            db_name: None,
        }
    }

    pub fn edge(data_type: DataType) -> Self {
        Self {
            data_type,
            role: PropertyRole::Edge,
            db_name: None,
        }
    }

    pub fn with_db_name(mut self, db_name: impl Into<String>) -> Self {
        self.db_name = Some(db_name.into());
        self
    }

    /// Persisted name, falling back to the name the property was declared under
    pub fn persisted_name<'a>(&'a self, declared_name: &'a str) -> &'a str {
        self.db_name.as_deref().unwrap_or(declared_name)
    }
}

/// Anything attached to an entity under a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    Property(PropertyDescriptor),
    /// Not a property descriptor (helpers, relationships, ...); never persisted
    Unrecognized { shape: String },
}

/// Capability set a model layer implements to take part in schema generation
pub trait EntityDefinition {
    /// Identity of the model, used to point at the offending definition in errors
    fn name(&self) -> &str;

    fn kind(&self) -> EntityKind;

    /// Persisted vertex or edge label
    fn label(&self) -> &str;

    /// Attributes in declaration order, keyed by declared name
    fn attributes(&self) -> &[(String, Attribute)];
}

impl<T: EntityDefinition + ?Sized> EntityDefinition for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn kind(&self) -> EntityKind {
        (**self).kind()
    }

    fn label(&self) -> &str {
        (**self).label()
    }

    fn attributes(&self) -> &[(String, Attribute)] {
        (**self).attributes()
    }
}

/// Owned entity definition, used by the manifest provider and by tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub kind: EntityKind,
    pub label: String,
    pub attributes: Vec<(String, Attribute)>,
}

impl Entity {
    pub fn new(name: impl Into<String>, kind: EntityKind, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            label: label.into(),
            attributes: Vec::new(),
        }
    }

    pub fn vertex(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, EntityKind::Vertex, label)
    }

    pub fn edge(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, EntityKind::Edge, label)
    }

    pub fn with_property(mut self, name: impl Into<String>, property: PropertyDescriptor) -> Self {
        self.attributes
            .push((name.into(), Attribute::Property(property)));
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.push((name.into(), attribute));
        self
    }
}

impl EntityDefinition for Entity {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> EntityKind {
        self.kind.clone()
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn attributes(&self) -> &[(String, Attribute)] {
        &self.attributes
    }
}
