// Copyright (c) 2024-2025 Goblinoid Contributors
// SPDX-License-Identifier: Apache-2.0
//
// Schema validator implementation

use serde::Serialize;

use crate::schema::aggregator::{Aggregation, Declaration};
use crate::schema::types::{Cardinality, DataType};

/// Schema validation errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Element '{entity}' is neither a vertex nor an edge (declared kind '{kind}')")]
    InvalidElementKind { entity: String, kind: String },

    #[error("{kind} label '{label}' found multiple times - in entity '{first}' and '{second}'")]
    DuplicateLabel {
        kind: String,
        label: String,
        first: String,
        second: String,
    },

    #[error("Property '{property}' in entity '{entity}' is a {found}, but should be a {expected}")]
    WrongPropertyRole {
        entity: String,
        property: String,
        expected: String,
        found: String,
    },

    #[error("Property type '{data_type}' of '{property}' in entity '{entity}' is not supported")]
    UnsupportedPropertyType {
        property: String,
        entity: String,
        data_type: DataType,
    },

    #[error("Vertex property '{property}' in entity '{entity}' has no supported cardinality (expected single, set or list)")]
    UnsupportedPropertyCardinality { property: String, entity: String },

    #[error("Property type does not match for '{property}': {first_type} in entity '{first_entity}', {data_type} in entity '{entity}'")]
    PropertyTypeMismatch {
        property: String,
        first_entity: String,
        first_type: DataType,
        entity: String,
        data_type: DataType,
    },

    #[error("Property cardinality does not match for '{property}': {first_cardinality} in entity '{first_entity}', {cardinality} in entity '{entity}'")]
    PropertyCardinalityMismatch {
        property: String,
        first_entity: String,
        first_cardinality: Cardinality,
        entity: String,
        cardinality: Cardinality,
    },
}

/// A reconciled property key, ready to be emitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyKey {
    pub name: String,
    pub data_type: DataType,
    /// Present whenever at least one vertex declares the key
    pub cardinality: Option<Cardinality>,
    /// Entities declaring the key, in first-seen order
    pub declared_by: Vec<String>,
}

impl PropertyKey {
    pub fn reserved(name: &str) -> Self {
        Self {
            name: name.to_string(),
            data_type: DataType::String,
            cardinality: Some(Cardinality::Single),
            declared_by: Vec::new(),
        }
    }

    /// Java class literal of the key type; keys are only built from supported types
    pub fn class_literal(&self) -> &'static str {
        self.data_type.class_literal().unwrap_or("String.class")
    }
}

/// Validate every aggregated property and reconcile its declarations into one key.
///
/// Keys come back ordered by persisted name.
pub fn validate(aggregation: &Aggregation) -> Result<Vec<PropertyKey>, ValidationError> {
    aggregation
        .properties
        .iter()
        .filter_map(|(name, declarations)| {
            declarations
                .first()
                .map(|first| reconcile(name, first, declarations))
        })
        .collect()
}

fn reconcile(
    name: &str,
    first: &Declaration,
    declarations: &[Declaration],
) -> Result<PropertyKey, ValidationError> {
    for declaration in declarations {
        let data_type = declaration.descriptor.data_type;
        if !data_type.is_supported() {
            return Err(ValidationError::UnsupportedPropertyType {
                property: name.to_string(),
                entity: declaration.entity.clone(),
                data_type,
            });
        }

        if data_type != first.descriptor.data_type {
            return Err(ValidationError::PropertyTypeMismatch {
                property: name.to_string(),
                first_entity: first.entity.clone(),
                first_type: first.descriptor.data_type,
                entity: declaration.entity.clone(),
                data_type,
            });
        }
    }

    let cardinality = reconcile_cardinality(name, declarations)?;

    let mut declared_by: Vec<String> = Vec::new();
    for declaration in declarations {
        if !declared_by.contains(&declaration.entity) {
            declared_by.push(declaration.entity.clone());
        }
    }

    Ok(PropertyKey {
        name: name.to_string(),
        data_type: first.descriptor.data_type,
        cardinality,
        declared_by,
    })
}

/// Unset cardinalities inherit the first explicit one; a vertex key with none at all is rejected.
fn reconcile_cardinality(
    name: &str,
    declarations: &[Declaration],
) -> Result<Option<Cardinality>, ValidationError> {
    let mut vertex_declarations = declarations
        .iter()
        .filter(|declaration| declaration.descriptor.role.is_vertex())
        .peekable();

    let first_vertex = match vertex_declarations.peek() {
        Some(declaration) => *declaration,
        // Edge-only keys carry no cardinality clause
        None => return Ok(None),
    };

    let mut anchor: Option<(&Declaration, Cardinality)> = None;
    for declaration in vertex_declarations {
        let Some(cardinality) = declaration.descriptor.role.cardinality() else {
            continue;
        };

        match anchor {
            None => anchor = Some((declaration, cardinality)),
            Some((first, first_cardinality)) if first_cardinality != cardinality => {
                return Err(ValidationError::PropertyCardinalityMismatch {
                    property: name.to_string(),
                    first_entity: first.entity.clone(),
                    first_cardinality,
                    entity: declaration.entity.clone(),
                    cardinality,
                });
            }
            Some(_) => {}
        }
    }

    match anchor {
        Some((_, cardinality)) => Ok(Some(cardinality)),
        None => Err(ValidationError::UnsupportedPropertyCardinality {
            property: name.to_string(),
            entity: first_vertex.entity.clone(),
        }),
    }
}
