// Copyright (c) 2024-2025 Goblinoid Contributors
// SPDX-License-Identifier: Apache-2.0
//
// Schema script generation configuration

use serde::{Deserialize, Serialize};

/// Default remote configuration used by the console preamble
pub const DEFAULT_REMOTE_CONFIG: &str = "conf/remote.yaml";

/// Default name of the management handle in the generated script
pub const DEFAULT_MANAGEMENT_VARIABLE: &str = "mgmt";

/// Configuration for the generated schema script
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Whether to connect the console to a remote server session before the statements
    pub remote_session: bool,

    /// Remote configuration file passed to `:remote connect`
    pub remote_config: String,

    /// Variable holding the management system
    pub management_variable: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            remote_session: true,
            remote_config: DEFAULT_REMOTE_CONFIG.to_string(),
            management_variable: DEFAULT_MANAGEMENT_VARIABLE.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Script to be fed to a console connected to a Gremlin server
    pub fn remote() -> Self {
        Self::default()
    }

    /// Script evaluated where `graph` is already bound (embedded console, init scripts)
    pub fn embedded() -> Self {
        Self {
            remote_session: false,
            ..Self::default()
        }
    }

    pub fn with_remote_config(mut self, remote_config: impl Into<String>) -> Self {
        self.remote_config = remote_config.into();
        self
    }

    pub fn with_management_variable(mut self, variable: impl Into<String>) -> Self {
        self.management_variable = variable.into();
        self
    }
}
