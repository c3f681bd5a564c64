// Copyright (c) 2024-2025 Goblinoid Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Summary formatting for CLI output

use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use goblinoid::{LabelDefinition, SchemaDocument};

/// Formats a derived schema for the terminal
pub struct SummaryFormatter;

impl SummaryFormatter {
    /// Labels and property keys as tables
    pub fn format(document: &SchemaDocument) -> String {
        let summary = document.summary();
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Schema Summary".bold().green()));
        output.push_str(&format!(
            "Vertex labels: {}, edge labels: {}, property keys: {}\n\n",
            summary.vertex_labels, summary.edge_labels, summary.property_keys
        ));

        let mut labels = Table::new();
        labels.load_preset(UTF8_FULL);
        labels.set_header(Self::header(&["Label", "Kind", "Entity"]));
        Self::add_label_rows(&mut labels, document.vertex_labels(), "vertex");
        Self::add_label_rows(&mut labels, document.edge_labels(), "edge");
        output.push_str(&labels.to_string());
        output.push('\n');

        let mut keys = Table::new();
        keys.load_preset(UTF8_FULL);
        keys.set_header(Self::header(&["Property", "Type", "Cardinality", "Declared by"]));
        for key in document
            .property_keys()
            .iter()
            .chain(document.reserved_keys().iter())
        {
            let declared_by = if key.declared_by.is_empty() {
                "(reserved)".to_string()
            } else {
                key.declared_by.join(", ")
            };
            keys.add_row(vec![
                key.name.clone(),
                key.data_type.to_string(),
                key.cardinality
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                declared_by,
            ]);
        }
        output.push_str(&keys.to_string());
        output.push('\n');

        output
    }

    /// Non-fatal findings collected during derivation
    pub fn format_warnings(warnings: &[String]) -> String {
        if warnings.is_empty() {
            return String::new();
        }

        let mut output = format!("\n{}\n", "Warnings:".bold().yellow());
        for (i, warning) in warnings.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, warning.yellow()));
        }
        output
    }

    fn header(columns: &[&str]) -> Vec<Cell> {
        columns
            .iter()
            .map(|col| Cell::new(col).fg(Color::Green))
            .collect()
    }

    fn add_label_rows(table: &mut Table, labels: &[LabelDefinition], kind: &str) {
        for definition in labels {
            table.add_row(vec![
                definition.label.clone(),
                kind.to_string(),
                definition.entity.clone(),
            ]);
        }
    }
}
