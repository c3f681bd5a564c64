// Copyright (c) 2024-2025 Goblinoid Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Schema generation command handler

use colored::Colorize;

use super::commands::Cli;
use super::output::SummaryFormatter;
use goblinoid::{CollectedDiagnostics, ModelManifest, SchemaGenerator};

/// Resolve the models, derive the schema and write the script.
///
/// The schema file is only created once the models validated.
pub fn handle_generate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let manifest = ModelManifest::load(&cli.manifest)?;
    let entities = manifest.collection(&cli.models_iterable)?;

    log::info!(
        "Creating schema from {} entities of '{}', writing result into {}",
        entities.len(),
        cli.models_iterable,
        cli.schema_file.display()
    );

    let generator = SchemaGenerator::new(cli.generator_config());
    let mut diagnostics = CollectedDiagnostics::new();
    let result = generator.generate_file(
        &entities,
        &cli.schema_file,
        cli.indexes_file.as_deref(),
        &mut diagnostics,
    );

    for warning in &diagnostics.warnings {
        log::warn!("{}", warning);
    }
    let document = result?;

    println!(
        "{}",
        format!("Schema written to {}", cli.schema_file.display()).green()
    );
    if cli.summary {
        print!("{}", SummaryFormatter::format(&document));
        print!("{}", SummaryFormatter::format_warnings(&diagnostics.warnings));
    }

    Ok(())
}
