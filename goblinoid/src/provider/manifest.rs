// Copyright (c) 2024-2025 Goblinoid Contributors
// SPDX-License-Identifier: Apache-2.0
//
// JSON model manifest provider

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use super::InputResolutionError;
use crate::schema::types::{
    Attribute, Cardinality, DataType, Entity, EntityKind, PropertyDescriptor,
};

/// Attribute shape of a vertex property
pub const VERTEX_PROPERTY_SHAPE: &str = "vertex_property";

/// Attribute shape of an edge property
pub const EDGE_PROPERTY_SHAPE: &str = "property";

/// Entity as written in a manifest
#[derive(Debug, Deserialize)]
struct ManifestEntity {
    name: String,
    kind: EntityKind,
    /// Defaults to the lowercased entity name
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    attributes: Vec<ManifestAttribute>,
}

#[derive(Debug, Deserialize)]
struct ManifestAttribute {
    name: String,
    shape: String,
    #[serde(rename = "type", default)]
    data_type: Option<String>,
    #[serde(default)]
    cardinality: Option<String>,
    #[serde(default)]
    db_name: Option<String>,
}

impl ManifestAttribute {
    fn data_type(&self) -> Result<Option<DataType>, String> {
        self.data_type
            .as_deref()
            .map(|name| {
                serde_json::from_value(Value::String(name.to_string())).map_err(|_| {
                    format!(
                        "property '{}' has unknown type '{}' (supported: {})",
                        self.name,
                        name,
                        join_names(&DataType::SUPPORTED)
                    )
                })
            })
            .transpose()
    }

    fn cardinality(&self) -> Result<Option<Cardinality>, String> {
        self.cardinality
            .as_deref()
            .map(|name| {
                serde_json::from_value(Value::String(name.to_string())).map_err(|_| {
                    format!(
                        "property '{}' has unknown cardinality '{}' (supported: {})",
                        self.name,
                        name,
                        join_names(&Cardinality::ALL)
                    )
                })
            })
            .transpose()
    }

    fn into_attribute(self) -> Result<(String, Attribute), String> {
        let attribute = match self.shape.as_str() {
            VERTEX_PROPERTY_SHAPE => {
                let data_type = self.data_type()?.ok_or_else(|| {
                    format!("vertex property '{}' declares no type", self.name)
                })?;
                let mut descriptor = PropertyDescriptor::vertex(data_type, self.cardinality()?);
                descriptor.db_name = self.db_name;
                Attribute::Property(descriptor)
            }
            EDGE_PROPERTY_SHAPE => {
                let data_type = self
                    .data_type()?
                    .ok_or_else(|| format!("property '{}' declares no type", self.name))?;
                if self.cardinality.is_some() {
                    return Err(format!(
                        "property '{}' is an edge property and cannot declare a cardinality",
                        self.name
                    ));
                }
                let mut descriptor = PropertyDescriptor::edge(data_type);
                descriptor.db_name = self.db_name;
                Attribute::Property(descriptor)
            }
            other => Attribute::Unrecognized {
                shape: other.to_string(),
            },
        };
        Ok((self.name, attribute))
    }
}

impl ManifestEntity {
    fn into_entity(self) -> Result<Entity, String> {
        let label = self.label.unwrap_or_else(|| self.name.to_lowercase());
        let attributes = self
            .attributes
            .into_iter()
            .map(ManifestAttribute::into_attribute)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Entity {
            name: self.name,
            kind: self.kind,
            label,
            attributes,
        })
    }
}

/// A model manifest: named collections of entity definitions
#[derive(Debug, Clone)]
pub struct ModelManifest {
    path: PathBuf,
    collections: Map<String, Value>,
}

impl ModelManifest {
    /// Read and parse a manifest file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InputResolutionError> {
        let path = path.as_ref();
        log::debug!("Loading model manifest {}", path.display());

        let text =
            fs::read_to_string(path).map_err(|source| InputResolutionError::ManifestUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json(path, &text)
    }

    /// Parse manifest text; `path` is only used for error reporting
    pub fn from_json(path: impl Into<PathBuf>, text: &str) -> Result<Self, InputResolutionError> {
        let path = path.into();
        let root: Value =
            serde_json::from_str(text).map_err(|e| InputResolutionError::ManifestMalformed {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        match root {
            Value::Object(collections) => Ok(Self { path, collections }),
            other => Err(InputResolutionError::ManifestMalformed {
                path,
                reason: format!(
                    "expected an object of model collections, found {}",
                    value_kind(&other)
                ),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Collection names, sorted
    pub fn collection_names(&self) -> Vec<String> {
        self.collections.keys().cloned().collect()
    }

    /// Decode every entity of a named collection, in manifest order
    pub fn collection(&self, name: &str) -> Result<Vec<Entity>, InputResolutionError> {
        let value =
            self.collections
                .get(name)
                .ok_or_else(|| InputResolutionError::CollectionNotFound {
                    collection: name.to_string(),
                    path: self.path.clone(),
                    available: self.collection_names(),
                })?;

        let items = value
            .as_array()
            .ok_or_else(|| InputResolutionError::CollectionNotIterable {
                collection: name.to_string(),
                path: self.path.clone(),
                found: value_kind(value).to_string(),
            })?;

        let entities = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                ManifestEntity::deserialize(item)
                    .map_err(|e| e.to_string())
                    .and_then(ManifestEntity::into_entity)
                    .map_err(|reason| InputResolutionError::InvalidEntity {
                        collection: name.to_string(),
                        index,
                        reason,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "Resolved {} entities from models iterable '{}'",
            entities.len(),
            name
        );
        Ok(entities)
    }
}

fn join_names<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
