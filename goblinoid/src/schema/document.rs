// Copyright (c) 2024-2025 Goblinoid Contributors
// SPDX-License-Identifier: Apache-2.0
//
// Validated in-memory schema model

use serde::Serialize;

use crate::schema::aggregator::Aggregation;
use crate::schema::diagnostics::Diagnostics;
use crate::schema::types::{Cardinality, DataType, EntityDefinition};
use crate::schema::validator::{validate, PropertyKey, ValidationError};

/// Property key holding the element label, always created
pub const LABEL_PROPERTY_KEY: &str = "__label__";

/// Property key holding the model type name, always created
pub const TYPE_PROPERTY_KEY: &str = "__type__";

/// Entity name reported when a model collides with an engine-reserved key
const RESERVED_OWNER: &str = "<reserved>";

/// A vertex or edge label together with the entity it originates from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelDefinition {
    pub label: String,
    pub entity: String,
}

/// Fully validated schema, ready to be emitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaDocument {
    vertex_labels: Vec<LabelDefinition>,
    edge_labels: Vec<LabelDefinition>,
    property_keys: Vec<PropertyKey>,
    reserved_keys: Vec<PropertyKey>,
}

/// Counts reported after a schema has been derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemaSummary {
    pub vertex_labels: usize,
    pub edge_labels: usize,
    pub property_keys: usize,
}

impl SchemaDocument {
    /// Classify, aggregate and validate the entity sequence.
    ///
    /// Nothing is written anywhere: a document only exists once every check passed.
    pub fn derive<'e, I, E>(
        entities: I,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = &'e E>,
        E: EntityDefinition + ?Sized + 'e,
    {
        let aggregation = Aggregation::collect(entities, diagnostics)?;
        log::debug!(
            "Aggregated {} vertex labels, {} edge labels, {} property names",
            aggregation.vertex_labels.len(),
            aggregation.edge_labels.len(),
            aggregation.properties.len()
        );

        let mut property_keys = validate(&aggregation)?;
        for key in property_keys.iter().filter(|key| is_reserved(&key.name)) {
            check_reserved_compatible(key)?;
        }
        property_keys.retain(|key| !is_reserved(&key.name));

        Ok(Self {
            vertex_labels: into_label_definitions(aggregation.vertex_labels),
            edge_labels: into_label_definitions(aggregation.edge_labels),
            property_keys,
            reserved_keys: vec![
                PropertyKey::reserved(LABEL_PROPERTY_KEY),
                PropertyKey::reserved(TYPE_PROPERTY_KEY),
            ],
        })
    }

    /// Vertex labels in lexicographic order
    pub fn vertex_labels(&self) -> &[LabelDefinition] {
        &self.vertex_labels
    }

    /// Edge labels in lexicographic order
    pub fn edge_labels(&self) -> &[LabelDefinition] {
        &self.edge_labels
    }

    /// Model property keys ordered by persisted name, reserved keys excluded
    pub fn property_keys(&self) -> &[PropertyKey] {
        &self.property_keys
    }

    pub fn reserved_keys(&self) -> &[PropertyKey] {
        &self.reserved_keys
    }

    pub fn property_key(&self, name: &str) -> Option<&PropertyKey> {
        self.property_keys
            .iter()
            .chain(self.reserved_keys.iter())
            .find(|key| key.name == name)
    }

    pub fn summary(&self) -> SchemaSummary {
        SchemaSummary {
            vertex_labels: self.vertex_labels.len(),
            edge_labels: self.edge_labels.len(),
            property_keys: self.property_keys.len() + self.reserved_keys.len(),
        }
    }
}

fn is_reserved(name: &str) -> bool {
    name == LABEL_PROPERTY_KEY || name == TYPE_PROPERTY_KEY
}

/// A model may declare a reserved key only with the shape the engine creates it with
fn check_reserved_compatible(key: &PropertyKey) -> Result<(), ValidationError> {
    let entity = key.declared_by.first().cloned().unwrap_or_default();

    if key.data_type != DataType::String {
        return Err(ValidationError::PropertyTypeMismatch {
            property: key.name.clone(),
            first_entity: RESERVED_OWNER.to_string(),
            first_type: DataType::String,
            entity,
            data_type: key.data_type,
        });
    }

    match key.cardinality {
        Some(cardinality) if cardinality != Cardinality::Single => {
            Err(ValidationError::PropertyCardinalityMismatch {
                property: key.name.clone(),
                first_entity: RESERVED_OWNER.to_string(),
                first_cardinality: Cardinality::Single,
                entity,
                cardinality,
            })
        }
        _ => Ok(()),
    }
}

fn into_label_definitions(
    labels: std::collections::BTreeMap<String, String>,
) -> Vec<LabelDefinition> {
    labels
        .into_iter()
        .map(|(label, entity)| LabelDefinition { label, entity })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::diagnostics::CollectedDiagnostics;
    use crate::schema::types::{Entity, PropertyDescriptor};

    #[test]
    fn test_derive_orders_labels_and_keys() {
        let entities = vec![
            Entity::vertex("Zebra", "zebra").with_property(
                "stripes",
                PropertyDescriptor::vertex(DataType::Integer, Some(Cardinality::Single)),
            ),
            Entity::vertex("Ant", "ant").with_property(
                "legs",
                PropertyDescriptor::vertex(DataType::Integer, Some(Cardinality::Single)),
            ),
        ];
        let mut diagnostics = CollectedDiagnostics::new();

        let document = SchemaDocument::derive(&entities, &mut diagnostics).unwrap();

        let labels: Vec<&str> = document
            .vertex_labels()
            .iter()
            .map(|l| l.label.as_str())
            .collect();
        assert_eq!(labels, vec!["ant", "zebra"]);

        let keys: Vec<&str> = document
            .property_keys()
            .iter()
            .map(|k| k.name.as_str())
            .collect();
        assert_eq!(keys, vec!["legs", "stripes"]);
        assert_eq!(
            document.summary(),
            SchemaSummary {
                vertex_labels: 2,
                edge_labels: 0,
                property_keys: 4,
            }
        );
    }

    #[test]
    fn test_reserved_keys_always_present() {
        let entities: Vec<Entity> = Vec::new();
        let mut diagnostics = CollectedDiagnostics::new();

        let document = SchemaDocument::derive(&entities, &mut diagnostics).unwrap();

        let reserved: Vec<&str> = document
            .reserved_keys()
            .iter()
            .map(|k| k.name.as_str())
            .collect();
        assert_eq!(reserved, vec![LABEL_PROPERTY_KEY, TYPE_PROPERTY_KEY]);
        assert_eq!(
            document.property_key(TYPE_PROPERTY_KEY).unwrap().cardinality,
            Some(Cardinality::Single)
        );
    }

    #[test]
    fn test_compatible_reserved_declaration_is_folded() {
        let entities = vec![Entity::vertex("Person", "person").with_property(
            "kind",
            PropertyDescriptor::vertex(DataType::String, Some(Cardinality::Single))
                .with_db_name(TYPE_PROPERTY_KEY),
        )];
        let mut diagnostics = CollectedDiagnostics::new();

        let document = SchemaDocument::derive(&entities, &mut diagnostics).unwrap();
        assert!(document.property_keys().is_empty());
        assert_eq!(document.reserved_keys().len(), 2);
    }

    #[test]
    fn test_incompatible_reserved_declaration_is_rejected() {
        let entities = vec![Entity::vertex("Person", "person").with_property(
            LABEL_PROPERTY_KEY,
            PropertyDescriptor::vertex(DataType::Integer, Some(Cardinality::Single)),
        )];
        let mut diagnostics = CollectedDiagnostics::new();

        let err = SchemaDocument::derive(&entities, &mut diagnostics).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::PropertyTypeMismatch { ref entity, .. } if entity == "Person"
        ));
    }
}
