// Copyright (c) 2024-2025 Goblinoid Contributors
// SPDX-License-Identifier: Apache-2.0
//
// Diagnostics sinks handed to the schema engine for one invocation

/// Receives non-fatal findings while a schema is being derived
pub trait Diagnostics {
    fn warning(&mut self, message: String);
}

/// Forwards warnings to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warning(&mut self, message: String) {
        log::warn!("{}", message);
    }
}

/// Keeps warnings in memory so callers can report them after the run
#[derive(Debug, Default, Clone)]
pub struct CollectedDiagnostics {
    pub warnings: Vec<String>,
}

impl CollectedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl Diagnostics for CollectedDiagnostics {
    fn warning(&mut self, message: String) {
        log::debug!("Collected warning: {}", message);
        self.warnings.push(message);
    }
}
