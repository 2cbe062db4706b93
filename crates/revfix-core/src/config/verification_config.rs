use serde::{Deserialize, Serialize};

use crate::constants;

/// Disappearance verification configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Extra lint/format config globs on top of the built-in list.
    pub extra_config_patterns: Vec<String>,
}

impl VerificationConfig {
    /// Built-in patterns followed by the configured extras.
    pub fn config_file_patterns(&self) -> Vec<String> {
        constants::DEFAULT_CONFIG_FILE_PATTERNS
            .iter()
            .map(|p| p.to_string())
            .chain(self.extra_config_patterns.iter().cloned())
            .collect()
    }
}
