// Copyright (c) 2024-2025 Goblinoid Contributors
// SPDX-License-Identifier: Apache-2.0
//
// Entity classification into vertex and edge elements

use std::fmt;

use crate::schema::types::{EntityDefinition, EntityKind, PropertyRole};
use crate::schema::validator::ValidationError;

/// Schema element kinds the target database knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ElementKind {
    Vertex,
    Edge,
}

impl ElementKind {
    /// Whether a property role may be attached to this element kind
    pub fn accepts(&self, role: &PropertyRole) -> bool {
        match self {
            ElementKind::Vertex => role.is_vertex(),
            ElementKind::Edge => !role.is_vertex(),
        }
    }

    /// Role a property attached to this kind must have
    pub fn expected_role(&self) -> &'static str {
        match self {
            ElementKind::Vertex => "vertex property",
            ElementKind::Edge => "edge property",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Vertex => write!(f, "Vertex"),
            ElementKind::Edge => write!(f, "Edge"),
        }
    }
}

/// A classified entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element<'a> {
    Vertex { label: &'a str },
    Edge { label: &'a str },
}

impl<'a> Element<'a> {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Vertex { .. } => ElementKind::Vertex,
            Element::Edge { .. } => ElementKind::Edge,
        }
    }

    pub fn label(&self) -> &'a str {
        match self {
            Element::Vertex { label } | Element::Edge { label } => label,
        }
    }
}

/// Classify an entity as a vertex or an edge and extract its label
pub fn classify<E>(entity: &E) -> Result<Element<'_>, ValidationError>
where
    E: EntityDefinition + ?Sized,
{
    match entity.kind() {
        EntityKind::Vertex => Ok(Element::Vertex {
            label: entity.label(),
        }),
        EntityKind::Edge => Ok(Element::Edge {
            label: entity.label(),
        }),
        EntityKind::Other(kind) => Err(ValidationError::InvalidElementKind {
            entity: entity.name().to_string(),
            kind,
        }),
    }
}
