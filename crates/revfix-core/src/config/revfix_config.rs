//! Top-level revfix configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ObservabilityConfig, PairingConfig, ScoringWeights, VerificationConfig};
use crate::config_files::ConfigFileMatcher;
use crate::errors::ConfigError;

/// Project config file name, looked up in the root passed to [`RevfixConfig::load`].
pub const PROJECT_CONFIG_FILE: &str = "revfix.toml";

/// Upper bound on the temporal window (one year), keeps duration math finite.
const MAX_TEMPORAL_WINDOW_HOURS: i64 = 24 * 365;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`REVFIX_*`)
/// 2. Project config (`revfix.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RevfixConfig {
    pub pairing: PairingConfig,
    pub scoring: ScoringWeights,
    pub verification: VerificationConfig,
    pub observability: ObservabilityConfig,
}

impl RevfixConfig {
    /// Load configuration with layered resolution and validate the result.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        tracing::debug!(
            root = %root.display(),
            temporal_window_hours = config.pairing.temporal_window_hours,
            promotion_threshold = config.pairing.promotion_threshold,
            "revfix config loaded"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &RevfixConfig) -> Result<(), ConfigError> {
        let pairing = &config.pairing;
        if pairing.temporal_window_hours <= 0
            || pairing.temporal_window_hours > MAX_TEMPORAL_WINDOW_HOURS
        {
            return Err(ConfigError::ValidationFailed {
                field: "pairing.temporal_window_hours".to_string(),
                message: format!("must be between 1 and {MAX_TEMPORAL_WINDOW_HOURS}"),
            });
        }
        if pairing.same_pr_window_minutes <= 0
            || pairing.same_pr_window_minutes > pairing.temporal_window_hours * 60
        {
            return Err(ConfigError::ValidationFailed {
                field: "pairing.same_pr_window_minutes".to_string(),
                message: "must be positive and no longer than the temporal window".to_string(),
            });
        }
        for (field, value) in [
            ("pairing.storage_threshold", pairing.storage_threshold),
            ("pairing.promotion_threshold", pairing.promotion_threshold),
        ] {
            check_unit_interval(field, value)?;
        }
        if pairing.formatter_batch_min_files < 2 {
            return Err(ConfigError::ValidationFailed {
                field: "pairing.formatter_batch_min_files".to_string(),
                message: "must be at least 2".to_string(),
            });
        }
        for (name, value) in config.scoring.entries() {
            check_unit_interval(&format!("scoring.{name}"), value)?;
        }
        ConfigFileMatcher::new(&config.verification.config_file_patterns())?;
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored and the lower layer wins.
    fn apply_env_overrides(config: &mut RevfixConfig) {
        if let Some(v) = env_parse::<i64>("REVFIX_PAIRING_TEMPORAL_WINDOW_HOURS") {
            config.pairing.temporal_window_hours = v;
        }
        if let Some(v) = env_parse::<f64>("REVFIX_PAIRING_STORAGE_THRESHOLD") {
            config.pairing.storage_threshold = v;
        }
        if let Some(v) = env_parse::<f64>("REVFIX_PAIRING_PROMOTION_THRESHOLD") {
            config.pairing.promotion_threshold = v;
        }
        if let Ok(v) = std::env::var("REVFIX_LOG_LEVEL") {
            config.observability.log_level = v;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse::<T>().ok())
}

fn check_unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be between 0.0 and 1.0".to_string(),
        })
    }
}
