//! Recognition of lint/format configuration files.
//!
//! A pull request that edits one of these can make a finding disappear
//! without any code change, so both the scorer and the verifier consult it.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::constants;
use crate::errors::ConfigError;
use crate::models::paths;

/// Compiled set of lint/format config globs.
///
/// Bare file-name patterns match at any directory depth; patterns containing a
/// `/` are anchored at the repository root.
#[derive(Debug, Clone)]
pub struct ConfigFileMatcher {
    set: GlobSet,
}

impl ConfigFileMatcher {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            let anchored = if pattern.contains('/') {
                pattern.trim_start_matches('/').to_string()
            } else {
                format!("**/{pattern}")
            };
            let glob = GlobBuilder::new(&anchored)
                .literal_separator(true)
                .build()
                .map_err(|e| ConfigError::InvalidPattern {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|e| ConfigError::InvalidPattern {
            pattern: "<set>".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { set })
    }

    /// Matcher over the built-in pattern list.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::new(constants::DEFAULT_CONFIG_FILE_PATTERNS)
    }

    pub fn is_config_file(&self, path: &str) -> bool {
        self.set.is_match(paths::normalize(path))
    }

    /// True when any of `files` is a recognized config file.
    pub fn any_config_file<S: AsRef<str>>(&self, files: &[S]) -> bool {
        files.iter().any(|f| self.is_config_file(f.as_ref()))
    }
}
