// Copyright (c) 2024-2025 Goblinoid Contributors
// SPDX-License-Identifier: Apache-2.0
//
// Label and property aggregation across all entity definitions

use std::collections::BTreeMap;

use crate::schema::classifier::{classify, ElementKind};
use crate::schema::diagnostics::Diagnostics;
use crate::schema::types::{Attribute, EntityDefinition, PropertyDescriptor};
use crate::schema::validator::ValidationError;

/// One property declaration, remembered together with the entity declaring it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub entity: String,
    pub declared_name: String,
    pub descriptor: PropertyDescriptor,
}

/// Labels and properties collected from a sequence of entities
#[derive(Debug, Default, Clone)]
pub struct Aggregation {
    /// Vertex label -> originating entity
    pub vertex_labels: BTreeMap<String, String>,
    /// Edge label -> originating entity
    pub edge_labels: BTreeMap<String, String>,
    /// Persisted property name -> declarations in first-seen order
    pub properties: BTreeMap<String, Vec<Declaration>>,
    /// Attributes of the entity that claimed each label
    definitions: BTreeMap<(ElementKind, String), Vec<(String, Attribute)>>,
}

impl Aggregation {
    /// Aggregate every entity of the sequence, stopping at the first structural conflict
    pub fn collect<'e, I, E>(
        entities: I,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = &'e E>,
        E: EntityDefinition + ?Sized + 'e,
    {
        let mut aggregation = Self::default();
        for entity in entities {
            aggregation.add_entity(entity, diagnostics)?;
        }
        Ok(aggregation)
    }

    pub fn add_entity<E>(
        &mut self,
        entity: &E,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<(), ValidationError>
    where
        E: EntityDefinition + ?Sized,
    {
        let element = classify(entity)?;
        let kind = element.kind();
        let label = element.label();

        let labels = match kind {
            ElementKind::Vertex => &mut self.vertex_labels,
            ElementKind::Edge => &mut self.edge_labels,
        };

        let definition_key = (kind, label.to_string());
        if let Some(existing) = labels.get(label) {
            let same_definition = existing == entity.name()
                && self
                    .definitions
                    .get(&definition_key)
                    .is_some_and(|attributes| attributes.as_slice() == entity.attributes());
            if !same_definition {
                return Err(ValidationError::DuplicateLabel {
                    kind: kind.to_string(),
                    label: label.to_string(),
                    first: existing.clone(),
                    second: entity.name().to_string(),
                });
            }

            log::debug!(
                "Entity '{}' listed more than once, ignoring repeated definition",
                entity.name()
            );
            return Ok(());
        }
        labels.insert(label.to_string(), entity.name().to_string());
        self.definitions
            .insert(definition_key, entity.attributes().to_vec());

        for (declared_name, attribute) in entity.attributes() {
            let descriptor = match attribute {
                Attribute::Property(descriptor) => descriptor,
                Attribute::Unrecognized { shape } => {
                    diagnostics.warning(format!(
                        "Skipping attribute '{}' of entity '{}', shape '{}' is neither a vertex property nor a property",
                        declared_name,
                        entity.name(),
                        shape
                    ));
                    continue;
                }
            };

            if !kind.accepts(&descriptor.role) {
                return Err(ValidationError::WrongPropertyRole {
                    entity: entity.name().to_string(),
                    property: declared_name.clone(),
                    expected: kind.expected_role().to_string(),
                    found: descriptor.role.describe().to_string(),
                });
            }

            let persisted_name = descriptor.persisted_name(declared_name);
            self.properties
                .entry(persisted_name.to_string())
                .or_default()
                .push(Declaration {
                    entity: entity.name().to_string(),
                    declared_name: declared_name.clone(),
                    descriptor: descriptor.clone(),
                });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::diagnostics::CollectedDiagnostics;
    use crate::schema::types::{Cardinality, DataType, Entity};

    fn name_property() -> PropertyDescriptor {
        PropertyDescriptor::vertex(DataType::String, Some(Cardinality::Single))
    }

    #[test]
    fn test_collect_labels_and_properties() {
        let entities = vec![
            Entity::vertex("Person", "person").with_property("name", name_property()),
            Entity::vertex("Company", "company").with_property("name", name_property()),
            Entity::edge("WorksFor", "works_for")
                .with_property("since", PropertyDescriptor::edge(DataType::Integer)),
        ];
        let mut diagnostics = CollectedDiagnostics::new();

        let aggregation = Aggregation::collect(&entities, &mut diagnostics).unwrap();

        assert_eq!(aggregation.vertex_labels.len(), 2);
        assert_eq!(aggregation.vertex_labels["person"], "Person");
        assert_eq!(aggregation.edge_labels["works_for"], "WorksFor");

        let owners: Vec<&str> = aggregation.properties["name"]
            .iter()
            .map(|d| d.entity.as_str())
            .collect();
        assert_eq!(owners, vec!["Person", "Company"]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_db_name_override_groups_under_persisted_name() {
        let entities = vec![
            Entity::vertex("Person", "person")
                .with_property("full_name", name_property().with_db_name("name")),
            Entity::vertex("Company", "company").with_property("name", name_property()),
        ];
        let mut diagnostics = CollectedDiagnostics::new();

        let aggregation = Aggregation::collect(&entities, &mut diagnostics).unwrap();

        assert!(!aggregation.properties.contains_key("full_name"));
        let declarations = &aggregation.properties["name"];
        assert_eq!(declarations.len(), 2);
        assert_eq!(declarations[0].declared_name, "full_name");
    }

    #[test]
    fn test_duplicate_label_names_both_entities() {
        let entities = vec![
            Entity::vertex("Person", "person"),
            Entity::vertex("Robot", "person"),
        ];
        let mut diagnostics = CollectedDiagnostics::new();

        let err = Aggregation::collect(&entities, &mut diagnostics).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateLabel {
                kind: "Vertex".to_string(),
                label: "person".to_string(),
                first: "Person".to_string(),
                second: "Robot".to_string(),
            }
        );
    }

    #[test]
    fn test_same_label_allowed_across_kinds() {
        let entities = vec![
            Entity::vertex("Owner", "owns"),
            Entity::edge("Owns", "owns"),
        ];
        let mut diagnostics = CollectedDiagnostics::new();

        let aggregation = Aggregation::collect(&entities, &mut diagnostics).unwrap();
        assert!(aggregation.vertex_labels.contains_key("owns"));
        assert!(aggregation.edge_labels.contains_key("owns"));
    }

    #[test]
    fn test_repeated_entity_is_not_a_duplicate() {
        let person = Entity::vertex("Person", "person").with_property("name", name_property());
        let entities = vec![person.clone(), person];
        let mut diagnostics = CollectedDiagnostics::new();

        let aggregation = Aggregation::collect(&entities, &mut diagnostics).unwrap();
        assert_eq!(aggregation.properties["name"].len(), 1);
    }

    #[test]
    fn test_repeated_entity_with_different_definition_is_rejected() {
        let entities = vec![
            Entity::vertex("Person", "person").with_property(
                "age",
                PropertyDescriptor::vertex(DataType::Integer, Some(Cardinality::Single)),
            ),
            Entity::vertex("Person", "person")
                .with_property(
                    "age",
                    PropertyDescriptor::vertex(DataType::String, Some(Cardinality::List)),
                )
                .with_property("email", name_property()),
        ];
        let mut diagnostics = CollectedDiagnostics::new();

        let err = Aggregation::collect(&entities, &mut diagnostics).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateLabel {
                kind: "Vertex".to_string(),
                label: "person".to_string(),
                first: "Person".to_string(),
                second: "Person".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_edge_label() {
        let entities = vec![
            Entity::edge("Likes", "likes"),
            Entity::edge("Follows", "likes"),
        ];
        let mut diagnostics = CollectedDiagnostics::new();

        let err = Aggregation::collect(&entities, &mut diagnostics).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateLabel {
                kind: "Edge".to_string(),
                label: "likes".to_string(),
                first: "Likes".to_string(),
                second: "Follows".to_string(),
            }
        );
    }

    #[test]
    fn test_wrong_property_role() {
        let entities = vec![Entity::edge("Likes", "likes").with_property("weight", name_property())];
        let mut diagnostics = CollectedDiagnostics::new();

        let err = Aggregation::collect(&entities, &mut diagnostics).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongPropertyRole {
                entity: "Likes".to_string(),
                property: "weight".to_string(),
                expected: "edge property".to_string(),
                found: "vertex property".to_string(),
            }
        );
    }

    #[test]
    fn test_unrecognized_attribute_is_skipped_with_warning() {
        let entities = vec![Entity::vertex("Person", "person")
            .with_attribute(
                "greet",
                Attribute::Unrecognized {
                    shape: "method".to_string(),
                },
            )
            .with_property("name", name_property())];
        let mut diagnostics = CollectedDiagnostics::new();

        let aggregation = Aggregation::collect(&entities, &mut diagnostics).unwrap();

        assert_eq!(aggregation.properties.len(), 1);
        assert_eq!(diagnostics.warnings.len(), 1);
        assert!(diagnostics.warnings[0].contains("'greet'"));
    }
}
